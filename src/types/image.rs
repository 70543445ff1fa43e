use serde::Deserialize;

use super::{AspectRatio, ComplexityLevel, Language, VisualStyle};

#[derive(Debug, Deserialize)]
pub struct ImageGenerationRequest {
    /// Text prompt for image generation, usually the researched image prompt
    pub prompt: String,
    /// Aspect ratio hint for the image model
    #[serde(default, alias = "aspectRatio")]
    pub aspect_ratio: Option<AspectRatio>,
    /// Tags copied onto the returned image
    #[serde(default)]
    pub level: Option<ComplexityLevel>,
    #[serde(default)]
    pub style: Option<VisualStyle>,
    #[serde(default)]
    pub language: Option<Language>,
}

/// Body of both the edit and the fix endpoints
#[derive(Debug, Deserialize)]
pub struct ImageEditRequest {
    /// Current image, as a data URI or bare base64
    pub image: String,
    /// Edit or correction instruction
    pub instruction: String,
}
