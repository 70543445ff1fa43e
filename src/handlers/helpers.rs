use std::future::Future;
use std::time::Duration;

use salvo::http::StatusCode;
use salvo::prelude::*;
use serde::de::DeserializeOwned;
use tokio::time::timeout;

use crate::error::{render_error, GenerationError};
use crate::state::AppState;

/// Largest accepted request body; edit requests carry a whole image
const MAX_BODY_SIZE: usize = 20 * 1024 * 1024;

/// Why a handler stopped early. The response has already been rendered.
pub(crate) struct Rendered;

pub(crate) fn get_state(depot: &mut Depot) -> Result<AppState, StatusError> {
    depot
        .obtain::<AppState>()
        .cloned()
        .map_err(|_| StatusError::internal_server_error())
}

/// Parse a JSON body, answering 400 on failure
pub(crate) async fn parse_body<T: DeserializeOwned>(
    req: &mut Request,
    res: &mut Response,
) -> Result<T, Rendered> {
    req.parse_json_with_max_size::<T>(MAX_BODY_SIZE)
        .await
        .map_err(|e| {
            tracing::error!("Failed to parse request: {}", e);
            render_error(
                res,
                StatusCode::BAD_REQUEST,
                &format!("Invalid request: {}", e),
                "invalid_request_error",
            );
            Rendered
        })
}

/// Answer 400 when a required text field is blank
pub(crate) fn require_non_empty(
    res: &mut Response,
    field: &str,
    value: &str,
) -> Result<(), Rendered> {
    if value.trim().is_empty() {
        render_error(
            res,
            StatusCode::BAD_REQUEST,
            &format!("'{}' must not be empty", field),
            "invalid_request_error",
        );
        return Err(Rendered);
    }
    Ok(())
}

/// Await an engine call bounded by `timeout_duration`, rendering any
/// failure as an error response.
pub(crate) async fn run_with_timeout<T>(
    res: &mut Response,
    timeout_duration: Duration,
    call: impl Future<Output = Result<T, GenerationError>>,
) -> Result<T, Rendered> {
    match timeout(timeout_duration, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => {
            tracing::error!("Generation error: {}", e);
            render_error(res, e.status_code(), &e.to_string(), e.error_type());
            Err(Rendered)
        }
        Err(_) => {
            tracing::error!("Generation timed out after {:?}", timeout_duration);
            render_error(
                res,
                StatusCode::GATEWAY_TIMEOUT,
                &format!("Generation timed out after {}s", timeout_duration.as_secs()),
                "timeout_error",
            );
            Err(Rendered)
        }
    }
}
