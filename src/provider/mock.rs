//! Recording provider for tests

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use super::{CredentialSource, GenerateContentRequest, GenerateContentResponse, GenerativeProvider};
use crate::error::GenerationError;

/// Replays queued replies in order and records every call
#[derive(Default)]
pub struct MockProvider {
    replies: Mutex<VecDeque<Result<GenerateContentResponse, GenerationError>>>,
    calls: Mutex<Vec<(String, GenerateContentRequest)>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, response: GenerateContentResponse) -> Self {
        self.replies.lock().unwrap().push_back(Ok(response));
        self
    }

    pub fn reply_json(self, value: serde_json::Value) -> Self {
        self.reply(serde_json::from_value(value).unwrap())
    }

    pub fn fail(self, err: GenerationError) -> Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn calls(&self) -> Vec<(String, GenerateContentRequest)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeProvider for MockProvider {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), request.clone()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::provider("no reply queued")))
    }
}

/// Fixed API key
pub struct StaticCredentials(pub String);

impl CredentialSource for StaticCredentials {
    fn api_key(&self) -> Result<String, GenerationError> {
        Ok(self.0.clone())
    }
}

/// Reply whose first candidate holds the given text
pub fn text_reply(text: &str, sources: &[(&str, &str)]) -> serde_json::Value {
    let chunks: Vec<_> = sources
        .iter()
        .map(|(uri, title)| json!({"web": {"uri": uri, "title": title}}))
        .collect();
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "groundingMetadata": {"groundingChunks": chunks}
        }]
    })
}

/// Reply whose first part is an inline PNG
pub fn image_reply(payload: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [
                {"inlineData": {"mimeType": "image/png", "data": payload}}
            ]}
        }]
    })
}
