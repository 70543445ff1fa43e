//! Image generation and editing
//!
//! Every call sends one request to an image model and expects the first
//! part of the first candidate to be inline image data. Anything else is a
//! failure; a partial image is never returned.

use crate::data_uri::{
    detect_image_mime, is_base64_payload, png_data_uri, strip_image_prefix, DEFAULT_EDIT_MIME,
};
use crate::error::{GenerationError, ImageOperation};
use crate::prompt::fix_instruction;
use crate::provider::{GenerateContentRequest, GenerateContentResponse, Part};
use crate::types::AspectRatio;

use super::InfographicEngine;

impl InfographicEngine {
    /// Render an image from a text prompt. Returns a PNG data URI.
    pub async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: Option<AspectRatio>,
    ) -> Result<String, GenerationError> {
        tracing::info!("Generating image ({} prompt chars)", prompt.len());

        let body = GenerateContentRequest::from_parts(vec![Part::text(prompt)])
            .with_image_response(aspect_ratio.as_ref().map(AspectRatio::as_str));
        let response = self.provider.generate_content(&self.models.image, &body).await?;

        extract_image(&response, ImageOperation::Generate)
    }

    /// Apply a free-form edit instruction to `current_image`
    pub async fn edit_image(
        &self,
        current_image: &str,
        instruction: &str,
    ) -> Result<String, GenerationError> {
        tracing::info!("Editing image: {:?}", instruction);
        self.resubmit(current_image, instruction.to_string(), ImageOperation::Edit)
            .await
    }

    /// Apply a correction wrapped in the "simplify and fix" template
    pub async fn fix_image(
        &self,
        current_image: &str,
        correction: &str,
    ) -> Result<String, GenerationError> {
        tracing::info!("Fixing image: {:?}", correction);
        self.resubmit(current_image, fix_instruction(correction), ImageOperation::Fix)
            .await
    }

    async fn resubmit(
        &self,
        current_image: &str,
        instruction: String,
        operation: ImageOperation,
    ) -> Result<String, GenerationError> {
        // Inputs are tagged as JPEG whatever their encoding unless detection is on
        let mime_type = if self.detect_edit_mime {
            detect_image_mime(current_image)
        } else {
            DEFAULT_EDIT_MIME
        };
        let payload = strip_image_prefix(current_image);
        tracing::debug!("Resubmitting {} bytes of base64 as {}", payload.len(), mime_type);

        let body = GenerateContentRequest::from_parts(vec![
            Part::inline(mime_type, payload),
            Part::text(instruction),
        ])
        .with_image_response(None);
        let response = self.provider.generate_content(&self.models.edit, &body).await?;

        extract_image(&response, operation)
    }
}

fn extract_image(
    response: &GenerateContentResponse,
    operation: ImageOperation,
) -> Result<String, GenerationError> {
    match response.first_inline_data() {
        Some(payload) if is_base64_payload(payload) => Ok(png_data_uri(payload)),
        Some(_) => {
            tracing::error!("Image payload for {} is not valid base64", operation);
            Err(GenerationError::EmptyResult { operation })
        }
        None => {
            tracing::error!(
                "Provider reply carried no image to {} (finish reason: {})",
                operation,
                response.finish_reason().unwrap_or("none")
            );
            Err(GenerationError::EmptyResult { operation })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::engines::{InfographicEngine, Models};
    use crate::error::{GenerationError, ImageOperation};
    use crate::provider::mock::{image_reply, text_reply, MockProvider};
    use crate::provider::Modality;
    use crate::types::AspectRatio;

    const PNG_B64: &str = "iVBORw0KGgo=";

    fn engine(provider: &Arc<MockProvider>) -> InfographicEngine {
        InfographicEngine::new(provider.clone(), Models::default())
    }

    #[tokio::test]
    async fn generate_wraps_payload_as_png_data_uri() {
        let provider = Arc::new(MockProvider::new().reply_json(image_reply(PNG_B64)));
        let data = engine(&provider)
            .generate_image("a volcano cross-section", None)
            .await
            .unwrap();
        assert_eq!(data, format!("data:image/png;base64,{PNG_B64}"));

        let (model, request) = &provider.calls()[0];
        assert_eq!(model, "gemini-3-pro-image-preview");
        assert_eq!(request.contents[0].parts.len(), 1);
        assert_eq!(
            request.contents[0].parts[0].text.as_deref(),
            Some("a volcano cross-section")
        );
        let config = request.generation_config.as_ref().unwrap();
        assert_eq!(config.response_modalities, vec![Modality::Image]);
        assert!(config.image_config.is_none());
        assert!(request.tools.is_empty());
    }

    #[tokio::test]
    async fn generate_forwards_aspect_ratio() {
        let provider = Arc::new(MockProvider::new().reply_json(image_reply(PNG_B64)));
        engine(&provider)
            .generate_image("p", Some(AspectRatio::Landscape))
            .await
            .unwrap();
        let (_, request) = &provider.calls()[0];
        let ratio = &request.generation_config.as_ref().unwrap().image_config;
        assert_eq!(ratio.as_ref().unwrap().aspect_ratio, "16:9");
    }

    #[tokio::test]
    async fn generate_fails_without_inline_data() {
        let provider = Arc::new(MockProvider::new().reply_json(text_reply("I can't draw that.", &[])));
        let err = engine(&provider).generate_image("p", None).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate image");
    }

    #[tokio::test]
    async fn generate_rejects_corrupt_payload() {
        let provider = Arc::new(MockProvider::new().reply_json(image_reply("%%%not-base64%%%")));
        let err = engine(&provider).generate_image("p", None).await.unwrap_err();
        assert!(matches!(
            err,
            GenerationError::EmptyResult { operation: ImageOperation::Generate }
        ));
    }

    #[tokio::test]
    async fn image_must_be_the_first_part() {
        let provider = Arc::new(MockProvider::new().reply_json(json!({
            "candidates": [{"content": {"parts": [
                {"text": "Here is your image"},
                {"inlineData": {"mimeType": "image/png", "data": PNG_B64}}
            ]}}]
        })));
        assert!(engine(&provider).generate_image("p", None).await.is_err());
    }

    #[tokio::test]
    async fn edit_strips_prefix_and_tags_jpeg() {
        for prefix in ["data:image/png;base64,", "data:image/jpeg;base64,", "data:image/jpg;base64,"] {
            let provider = Arc::new(MockProvider::new().reply_json(image_reply(PNG_B64)));
            let data = engine(&provider)
                .edit_image(&format!("{prefix}QUJD"), "Make the title red")
                .await
                .unwrap();
            assert!(data.starts_with("data:image/png;base64,"));

            let (model, request) = &provider.calls()[0];
            assert_eq!(model, "gemini-3-pro-image-preview");
            let parts = &request.contents[0].parts;
            let inline = parts[0].inline_data.as_ref().unwrap();
            assert_eq!(inline.data, "QUJD");
            assert_eq!(inline.mime_type, "image/jpeg");
            assert_eq!(parts[1].text.as_deref(), Some("Make the title red"));
        }
    }

    #[tokio::test]
    async fn edit_detects_mime_when_enabled() {
        let provider = Arc::new(MockProvider::new().reply_json(image_reply(PNG_B64)));
        let engine = engine(&provider).with_edit_mime_detection(true);
        engine
            .edit_image("data:image/png;base64,QUJD", "zoom in")
            .await
            .unwrap();
        let (_, request) = &provider.calls()[0];
        let inline = request.contents[0].parts[0].inline_data.as_ref().unwrap();
        assert_eq!(inline.mime_type, "image/png");
    }

    #[tokio::test]
    async fn fix_wraps_correction_in_template() {
        let provider = Arc::new(MockProvider::new().reply_json(image_reply(PNG_B64)));
        engine(&provider)
            .fix_image("data:image/jpeg;base64,QUJD", "Spell chlorophyll correctly")
            .await
            .unwrap();
        let (_, request) = &provider.calls()[0];
        let text = request.contents[0].parts[1].text.as_deref().unwrap();
        assert!(text.contains("Goal: Simplify and Fix."));
        assert!(text.contains("Instruction: Spell chlorophyll correctly."));
        assert_eq!(request.contents[0].parts[0].inline_data.as_ref().unwrap().data, "QUJD");
    }

    #[tokio::test]
    async fn edit_and_fix_name_their_failures() {
        let provider = Arc::new(
            MockProvider::new()
                .reply_json(json!({"candidates": []}))
                .reply_json(json!({"candidates": [{"content": {"parts": []}}]})),
        );
        let engine = engine(&provider);
        let edit = engine.edit_image("QUJD", "x").await.unwrap_err();
        let fix = engine.fix_image("QUJD", "x").await.unwrap_err();
        assert_eq!(edit.to_string(), "Failed to edit image");
        assert_eq!(fix.to_string(), "Failed to fix image");
    }

    #[tokio::test]
    async fn provider_error_passes_through() {
        let provider = Arc::new(MockProvider::new().fail(GenerationError::provider("timeout")));
        let err = engine(&provider).edit_image("QUJD", "x").await.unwrap_err();
        assert!(matches!(err, GenerationError::Provider { .. }));
    }
}
