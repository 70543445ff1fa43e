use std::time::Duration;

use eyre::{ensure, Result};

use crate::engines::{Models, DEFAULT_EDIT_MODEL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};
use crate::provider::DEFAULT_BASE_URL;

/// Environment variable holding the provider API key. It is read at each
/// provider call, not here.
pub const API_KEY_VAR: &str = "API_KEY";

/// Configuration from environment
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub edit_model: String,
    pub detect_edit_mime: bool,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let string_or = |name: &str, default: &str| {
            var(name)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            base_url: string_or("GEMINI_BASE_URL", DEFAULT_BASE_URL),
            text_model: string_or("TEXT_MODEL", DEFAULT_TEXT_MODEL),
            image_model: string_or("IMAGE_MODEL", DEFAULT_IMAGE_MODEL),
            edit_model: string_or("EDIT_MODEL", DEFAULT_EDIT_MODEL),
            detect_edit_mime: var("DETECT_EDIT_MIME")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            request_timeout: Duration::from_secs(
                var("REQUEST_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(300),
            ),
        }
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.base_url.starts_with("http://") || self.base_url.starts_with("https://"),
            "GEMINI_BASE_URL must be an http(s) URL, got {:?}",
            self.base_url
        );
        ensure!(
            !self.request_timeout.is_zero(),
            "REQUEST_TIMEOUT_SECS must be greater than zero"
        );
        Ok(())
    }

    pub fn models(&self) -> Models {
        Models {
            text: self.text_model.clone(),
            image: self.image_model.clone(),
            edit: self.edit_model.clone(),
        }
    }
}
