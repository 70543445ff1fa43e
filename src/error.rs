use std::fmt;

use salvo::http::StatusCode;
use salvo::prelude::*;
use thiserror::Error;

use crate::types::ApiError;

/// Render a standardized error response with proper HTTP status code
pub fn render_error(res: &mut Response, status: StatusCode, message: &str, error_type: &str) {
    res.status_code(status);
    res.render(Json(ApiError::new(message, error_type)));
}

/// Engine operation that can come back without an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOperation {
    Generate,
    Edit,
    Fix,
}

impl fmt::Display for ImageOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ImageOperation::Generate => "generate",
            ImageOperation::Edit => "edit",
            ImageOperation::Fix => "fix",
        })
    }
}

/// Errors raised by the generation engines
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The provider call failed (network, auth, quota, malformed body)
    #[error("Provider error{}: {message}", .status.map(|s| format!(" ({s})")).unwrap_or_default())]
    Provider {
        status: Option<u16>,
        message: String,
    },

    /// The provider answered but carried no usable image
    #[error("Failed to {operation} image")]
    EmptyResult { operation: ImageOperation },

    /// No credential could be resolved for the call
    #[error("Missing credential: {0} is not set")]
    MissingCredential(String),
}

impl GenerationError {
    pub fn provider(message: impl Into<String>) -> Self {
        GenerationError::Provider {
            status: None,
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            GenerationError::Provider { .. } | GenerationError::EmptyResult { .. } => {
                StatusCode::BAD_GATEWAY
            }
            GenerationError::MissingCredential(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            GenerationError::Provider { .. } => "provider_error",
            GenerationError::EmptyResult { .. } => "empty_result_error",
            GenerationError::MissingCredential(_) => "configuration_error",
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::Provider {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::provider(format!("Malformed provider response: {err}"))
    }
}
