use serde::{Deserialize, Serialize};

use super::{
    AspectRatio, ComplexityLevel, GeneratedImage, GenerationRequest, Language, ResearchResult,
    Verification, VisualStyle,
};

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub image: String,
    pub topic: String,
    #[serde(alias = "complexityLevel")]
    pub level: ComplexityLevel,
    #[serde(default, alias = "visualStyle")]
    pub style: VisualStyle,
    #[serde(default)]
    pub language: Language,
}

impl VerifyRequest {
    pub fn generation_request(&self) -> GenerationRequest {
        GenerationRequest::new(self.topic.clone(), self.level, self.style, self.language)
    }
}

/// Body of the combined research + render endpoint
#[derive(Debug, Deserialize)]
pub struct InfographicRequest {
    #[serde(flatten)]
    pub request: GenerationRequest,
    #[serde(default, alias = "aspectRatio")]
    pub aspect_ratio: Option<AspectRatio>,
}

#[derive(Debug, Serialize)]
pub struct InfographicResponse {
    pub research: ResearchResult,
    pub verification: Verification,
    pub image: GeneratedImage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infographic_request_flattens_generation_request() {
        let body = r#"{"topic":"Volcanoes","level":"Expert","style":"Sketch","language":"German","aspect_ratio":"16:9"}"#;
        let parsed: InfographicRequest = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.request.topic, "Volcanoes");
        assert_eq!(parsed.request.style, VisualStyle::Sketch);
        assert_eq!(parsed.request.language, Language::German);
        assert_eq!(parsed.aspect_ratio, Some(AspectRatio::Landscape));
    }
}
