//! Infographic API: research a topic, render it as an infographic, refine it
//!
//! Provides endpoints for:
//! - POST /v1/research - Search-grounded facts, image prompt and citations
//! - POST /v1/images/generations - Render an infographic from a prompt
//! - POST /v1/images/edits - Free-form edit of a rendered infographic
//! - POST /v1/images/fixes - "Simplify and fix" correction
//! - POST /v1/verify - Accuracy check (currently bypassed)
//! - POST /v1/infographics - Research and render in one call
//!
//! All generation is delegated to the Gemini API. The API key is read from
//! `API_KEY` at every provider call.

use std::sync::Arc;

use eyre::WrapErr;
use salvo::prelude::*;

mod config;
mod data_uri;
mod engines;
mod error;
mod handlers;
mod parse;
mod prompt;
mod provider;
mod router;
mod state;
mod types;

use config::{Config, API_KEY_VAR};
use engines::InfographicEngine;
use provider::{EnvCredentials, GeminiProvider};
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "infographic_api=info".into()),
        )
        .init();

    let config = Config::from_env();
    config.validate().wrap_err("Invalid configuration")?;
    tracing::info!("Starting infographic API server on port {}", config.port);
    tracing::info!(
        "Models: text={}, image={}, edit={}",
        config.text_model,
        config.image_model,
        config.edit_model
    );
    if std::env::var_os(API_KEY_VAR).is_none() {
        tracing::warn!("{} is not set; generation requests will fail until it is", API_KEY_VAR);
    }

    let provider = GeminiProvider::new(
        config.base_url.clone(),
        Arc::new(EnvCredentials::new(API_KEY_VAR)),
    );
    let engine = InfographicEngine::new(Arc::new(provider), config.models())
        .with_edit_mime_detection(config.detect_edit_mime);

    let state = AppState {
        engine: Arc::new(engine),
        request_timeout: config.request_timeout,
    };

    let router = router::build_router(state);

    let listen_addr = format!("0.0.0.0:{}", config.port);
    let acceptor = TcpListener::new(&listen_addr).bind().await;

    tracing::info!("HTTP server listening on http://{}", listen_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /v1/models");
    tracing::info!("  POST /v1/research");
    tracing::info!("  POST /v1/verify");
    tracing::info!("  POST /v1/infographics");
    tracing::info!("  POST /v1/images/generations");
    tracing::info!("  POST /v1/images/edits");
    tracing::info!("  POST /v1/images/fixes");

    Server::new(acceptor).serve(router).await;

    Ok(())
}
