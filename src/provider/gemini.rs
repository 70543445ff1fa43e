use std::sync::Arc;

use async_trait::async_trait;

use super::{
    CredentialSource, GenerateContentRequest, GenerateContentResponse, GenerativeProvider,
    ProviderErrorBody,
};
use crate::error::GenerationError;

/// Default Gemini REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini `generateContent` over HTTPS
pub struct GeminiProvider {
    client: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialSource>,
}

impl GeminiProvider {
    pub fn new(base_url: impl Into<String>, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl GenerativeProvider for GeminiProvider {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let api_key = self.credentials.api_key()?;
        let endpoint = self.endpoint(model);
        tracing::debug!("POST {}", endpoint);

        let response = self
            .client
            .post(&endpoint)
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ProviderErrorBody>(&body) {
                Ok(envelope) => match envelope.error.status {
                    Some(code) => format!("{}: {}", code, envelope.error.message),
                    None => envelope.error.message,
                },
                Err(_) => body,
            };
            tracing::error!("Provider returned {} for model {}: {}", status, model, message);
            return Err(GenerationError::Provider {
                status: Some(status.as_u16()),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
