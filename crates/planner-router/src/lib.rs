//! Planner Router
//!
//! HTTP service that turns free-text task descriptions into stored tasks.
//! Callers establish a JWT session, then post natural-language input which
//! the extractor breaks into title, priority, due date, estimate and
//! reminder fields.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod session;
pub mod store;

use config::RouterConfig;
use handlers::{create_router, AppState};
use planner_extractor::{ExtractorError, TaskExtractor};
use session::SessionManager;
use std::sync::Arc;
use store::InMemoryTaskStore;
use tokio::net::TcpListener;
use tracing::info;

/// Router error
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Extractor could not be built from the configured vocabulary
    #[error("Extractor error: {0}")]
    Extractor(#[from] ExtractorError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the application state for a configuration
pub fn build_state(config: &RouterConfig) -> Result<AppState, RouterError> {
    let session_manager = Arc::new(SessionManager::new(
        &config.jwt_secret,
        config.token_expiry_secs,
    ));
    let extractor = Arc::new(TaskExtractor::new(config.extractor.clone())?);

    Ok(AppState {
        session_manager,
        extractor,
        store: InMemoryTaskStore::new(),
        natural_language_enabled: config.natural_language_enabled,
    })
}

/// Start the Router HTTP server
///
/// Builds the extractor and session manager from configuration and serves
/// the task API until the process exits.
pub async fn start_server(config: RouterConfig) -> Result<(), RouterError> {
    info!("Starting Planner Router");
    info!("Bind address: {}", config.bind_addr());
    info!("Token expiry: {} seconds", config.token_expiry_secs);
    info!(
        "Natural language entry: {}",
        if config.natural_language_enabled { "enabled" } else { "disabled" }
    );

    let state = build_state(&config)?;
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Router listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| RouterError::Server(e.to_string()))?;

    Ok(())
}
