//! Application setup and initialization
//!
//! All initialization logic lives here rather than in main.rs, so the
//! pieces stay individually constructible for tests.

pub mod routes;
pub mod server;
pub mod storage;

use crate::services::mailer::{Mailer, SmtpMailer};
use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use voiceform_core::Config;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;

    crate::telemetry::init_telemetry()
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!("Configuration loaded and validated successfully");

    // Setup the upload storage sink
    let storage = storage::setup_storage(&config).await?;

    // Setup the mail transport
    let mailer: Arc<dyn Mailer> = Arc::new(SmtpMailer::from_config(&config)?);

    let is_production = config.is_production();
    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
        mailer,
        is_production,
    });

    // Setup routes
    let router = routes::setup_routes(&config, state.clone()).await?;

    Ok((state, router))
}
