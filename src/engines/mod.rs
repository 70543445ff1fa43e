//! Generation engines: research, image generation, editing and verification
//!
//! All operations are single-attempt calls against a [`GenerativeProvider`].
//! The engine holds no mutable state, so one instance is shared by every
//! request handler.

mod image;
mod research;
mod verify;

use std::sync::Arc;

use crate::provider::GenerativeProvider;

pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";
pub const DEFAULT_EDIT_MODEL: &str = "gemini-3-pro-image-preview";

/// Provider model used for each kind of call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Models {
    /// Search-grounded research
    pub text: String,
    /// Text-to-image generation
    pub image: String,
    /// Image editing and fixing
    pub edit: String,
}

impl Default for Models {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT_MODEL.to_string(),
            image: DEFAULT_IMAGE_MODEL.to_string(),
            edit: DEFAULT_EDIT_MODEL.to_string(),
        }
    }
}

pub struct InfographicEngine {
    provider: Arc<dyn GenerativeProvider>,
    models: Models,
    /// Tag edit inputs with the MIME type of their data URI instead of JPEG
    detect_edit_mime: bool,
}

impl InfographicEngine {
    pub fn new(provider: Arc<dyn GenerativeProvider>, models: Models) -> Self {
        Self {
            provider,
            models,
            detect_edit_mime: false,
        }
    }

    pub fn with_edit_mime_detection(mut self, enabled: bool) -> Self {
        self.detect_edit_mime = enabled;
        self
    }

    pub fn models(&self) -> &Models {
        &self.models
    }
}
