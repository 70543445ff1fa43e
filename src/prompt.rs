//! Instruction text sent to the generation models
//!
//! Everything here is a pure function of the user's choices, so the exact
//! text of a request can be reproduced and asserted on.

use crate::types::{ComplexityLevel, GenerationRequest, VisualStyle};

/// Header that opens the facts section of a research reply
pub const FACTS_HEADER: &str = "FACTS:";
/// Header that opens the image prompt section of a research reply
pub const IMAGE_PROMPT_HEADER: &str = "IMAGE_PROMPT:";

/// Audience instruction for a complexity level
pub fn level_instruction(level: ComplexityLevel) -> &'static str {
    match level {
        ComplexityLevel::Elementary => {
            "Target Audience: Elementary School (Ages 6-10). Style: Bright, simple, fun. Use large clear icons and very minimal text labels."
        }
        ComplexityLevel::HighSchool => {
            "Target Audience: High School. Style: Standard Textbook. Clean lines, clear labels, accurate maps or diagrams. Avoid cartoony elements."
        }
        ComplexityLevel::College => {
            "Target Audience: University. Style: Academic Journal. High detail, data-rich, precise cross-sections or complex schematics."
        }
        ComplexityLevel::Expert => {
            "Target Audience: Industry Expert. Style: Technical Blueprint/Schematic. Extremely dense detail, monochrome or technical coloring, precise annotations."
        }
    }
}

/// Aesthetic instruction for a visual style
pub fn style_instruction(style: VisualStyle) -> &'static str {
    match style {
        VisualStyle::Minimalist => {
            "Aesthetic: Bauhaus Minimalist. Flat vector art, limited color palette (2-3 colors), reliance on negative space and simple geometric shapes."
        }
        VisualStyle::Realistic => {
            "Aesthetic: Photorealistic Composite. Cinematic lighting, 8k resolution, highly detailed textures. Looks like a photograph."
        }
        VisualStyle::Cartoon => {
            "Aesthetic: Educational Comic. Vibrant colors, thick outlines, expressive cel-shaded style."
        }
        VisualStyle::Vintage => {
            "Aesthetic: 19th Century Scientific Lithograph. Engraving style, sepia tones, textured paper background, fine hatch lines."
        }
        VisualStyle::Futuristic => {
            "Aesthetic: Cyberpunk HUD. Glowing neon blue/cyan lines on dark background, holographic data visualization, 3D wireframes."
        }
        VisualStyle::ThreeDRender => {
            "Aesthetic: 3D Isometric Render. Claymorphism or high-gloss plastic texture, studio lighting, soft shadows, looks like a physical model."
        }
        VisualStyle::Sketch => {
            "Aesthetic: Da Vinci Notebook. Ink on parchment sketch, handwritten annotations style, rough but accurate lines."
        }
        VisualStyle::Default => {
            "Aesthetic: High-quality digital scientific illustration. Clean, modern, highly detailed."
        }
    }
}

/// Research instruction for the search-grounded text model
pub fn research_instruction(request: &GenerationRequest) -> String {
    format!(
        "You are an expert visual researcher.\n\
         Your goal is to research the topic: \"{topic}\" and create a plan for an infographic.\n\
         \n\
         **IMPORTANT: Use the Google Search tool to find the most accurate, up-to-date information about this topic.**\n\
         \n\
         Context:\n\
         {level}\n\
         {style}\n\
         Language: {language}\n\
         \n\
         Please provide your response in the following format EXACTLY:\n\
         \n\
         {facts_header}\n\
         - [Fact 1]\n\
         - [Fact 2]\n\
         - [Fact 3]\n\
         \n\
         {prompt_header}\n\
         [A highly detailed image generation prompt describing the visual composition, colors, and layout for the infographic. Do not include citations in the prompt.]\n",
        topic = request.topic,
        level = level_instruction(request.level),
        style = style_instruction(request.style),
        language = request.language.name(),
        facts_header = FACTS_HEADER,
        prompt_header = IMAGE_PROMPT_HEADER,
    )
}

/// Image prompt used when the research reply carries none
pub fn fallback_image_prompt(request: &GenerationRequest) -> String {
    format!(
        "{} {} {}",
        request.topic,
        level_instruction(request.level),
        style_instruction(request.style)
    )
}

/// Wraps a correction in the constrained "simplify and fix" edit template
pub fn fix_instruction(correction: &str) -> String {
    format!(
        "Edit this image.\n\
         Goal: Simplify and Fix.\n\
         Instruction: {correction}.\n\
         Ensure the design is clean and any text is large and legible.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;

    #[test]
    fn level_instruction_text() {
        let cases = [
            (
                ComplexityLevel::Elementary,
                "Target Audience: Elementary School (Ages 6-10). Style: Bright, simple, fun. Use large clear icons and very minimal text labels.",
            ),
            (
                ComplexityLevel::HighSchool,
                "Target Audience: High School. Style: Standard Textbook. Clean lines, clear labels, accurate maps or diagrams. Avoid cartoony elements.",
            ),
            (
                ComplexityLevel::College,
                "Target Audience: University. Style: Academic Journal. High detail, data-rich, precise cross-sections or complex schematics.",
            ),
            (
                ComplexityLevel::Expert,
                "Target Audience: Industry Expert. Style: Technical Blueprint/Schematic. Extremely dense detail, monochrome or technical coloring, precise annotations.",
            ),
        ];
        assert_eq!(cases.len(), ComplexityLevel::ALL.len());
        for (level, expected) in cases {
            assert_eq!(level_instruction(level), expected, "{level}");
        }
    }

    #[test]
    fn style_instruction_text() {
        let cases = [
            (
                VisualStyle::Default,
                "Aesthetic: High-quality digital scientific illustration. Clean, modern, highly detailed.",
            ),
            (
                VisualStyle::Minimalist,
                "Aesthetic: Bauhaus Minimalist. Flat vector art, limited color palette (2-3 colors), reliance on negative space and simple geometric shapes.",
            ),
            (
                VisualStyle::Realistic,
                "Aesthetic: Photorealistic Composite. Cinematic lighting, 8k resolution, highly detailed textures. Looks like a photograph.",
            ),
            (
                VisualStyle::Cartoon,
                "Aesthetic: Educational Comic. Vibrant colors, thick outlines, expressive cel-shaded style.",
            ),
            (
                VisualStyle::Vintage,
                "Aesthetic: 19th Century Scientific Lithograph. Engraving style, sepia tones, textured paper background, fine hatch lines.",
            ),
            (
                VisualStyle::Futuristic,
                "Aesthetic: Cyberpunk HUD. Glowing neon blue/cyan lines on dark background, holographic data visualization, 3D wireframes.",
            ),
            (
                VisualStyle::ThreeDRender,
                "Aesthetic: 3D Isometric Render. Claymorphism or high-gloss plastic texture, studio lighting, soft shadows, looks like a physical model.",
            ),
            (
                VisualStyle::Sketch,
                "Aesthetic: Da Vinci Notebook. Ink on parchment sketch, handwritten annotations style, rough but accurate lines.",
            ),
        ];
        for (style, expected) in cases {
            assert_eq!(style_instruction(style), expected, "{style}");
        }
    }

    #[test]
    fn research_instruction_embeds_all_choices() {
        let request = GenerationRequest::new(
            "Photosynthesis",
            ComplexityLevel::Elementary,
            VisualStyle::Cartoon,
            Language::English,
        );
        let text = research_instruction(&request);
        assert!(text.contains("\"Photosynthesis\""));
        assert!(text.contains(level_instruction(ComplexityLevel::Elementary)));
        assert!(text.contains(style_instruction(VisualStyle::Cartoon)));
        assert!(text.contains("Language: English"));
        assert!(text.contains("Google Search"));

        let facts_at = text.find(FACTS_HEADER).unwrap();
        let prompt_at = text.find(IMAGE_PROMPT_HEADER).unwrap();
        assert!(facts_at < prompt_at);
    }

    #[test]
    fn fallback_prompt_joins_topic_and_instructions() {
        let request = GenerationRequest::new(
            "Black holes",
            ComplexityLevel::College,
            VisualStyle::Vintage,
            Language::French,
        );
        assert_eq!(
            fallback_image_prompt(&request),
            format!(
                "Black holes {} {}",
                level_instruction(ComplexityLevel::College),
                style_instruction(VisualStyle::Vintage)
            )
        );
    }

    #[test]
    fn fix_template_demands_legibility() {
        let text = fix_instruction("Remove the duplicated arrow");
        assert!(text.starts_with("Edit this image."));
        assert!(text.contains("Goal: Simplify and Fix."));
        assert!(text.contains("Instruction: Remove the duplicated arrow."));
        assert!(text.contains("large and legible"));
    }
}
