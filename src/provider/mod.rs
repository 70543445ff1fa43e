//! Generative-AI provider seam
//!
//! Engines only see [`GenerativeProvider`]; the Gemini HTTP client is one
//! implementation and tests substitute a recording mock.

mod credentials;
mod gemini;
#[cfg(test)]
pub mod mock;
mod wire;

use async_trait::async_trait;

use crate::error::GenerationError;

pub use credentials::{CredentialSource, EnvCredentials};
pub use gemini::{GeminiProvider, DEFAULT_BASE_URL};
pub use wire::*;

/// A hosted model that turns content into content
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// One request/response round trip against `model`. No retries.
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError>;
}
