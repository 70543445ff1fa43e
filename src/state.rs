use std::sync::Arc;
use std::time::Duration;

use crate::engines::InfographicEngine;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Stateless generation engine
    pub engine: Arc<InfographicEngine>,
    /// Upper bound on each engine call made by a handler
    pub request_timeout: Duration,
}
