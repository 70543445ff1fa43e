use crate::types::{GenerationRequest, Verification};

use super::InfographicEngine;

pub const BYPASSED_CRITIQUE: &str = "Verification bypassed.";

impl InfographicEngine {
    /// Accuracy check seam. Currently performs no check and always passes.
    pub async fn verify(&self, _image: &str, request: &GenerationRequest) -> Verification {
        tracing::debug!("Skipping verification for {:?}", request.topic);
        Verification {
            is_accurate: true,
            critique: BYPASSED_CRITIQUE.to_string(),
        }
    }
}
