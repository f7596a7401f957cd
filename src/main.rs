//! Roster Dashboard Server
//!
//! Run with: cargo run --bin roster
//!
//! # Configuration
//!
//! Loaded from `config.toml` in the usual locations (see
//! `roster-cli config`), then overridden by environment variables:
//! - `ROSTER_API_URL`: HR API base URL (default: https://fastapi-hr.onrender.com)
//! - `ROSTER_API_TIMEOUT_SECS`: Request timeout (default: none)
//! - `ROSTER_HOST`: Host to bind to (default: 0.0.0.0)
//! - `ROSTER_PORT`: Port to listen on (default: 8501)
//! - `ROSTER_LOG_LEVEL`, `ROSTER_LOG_FORMAT`: Logging (default: info, pretty)
//! - `RUST_LOG`: Full filter directive, takes precedence over the log level

use roster::client::HrClient;
use roster::config::{Config, LoggingConfig};
use roster::web::{serve, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Errors here are printed by anyhow; no subscriber is installed yet
    let config = Config::load_default()?;
    init_tracing(&config.logging);

    tracing::info!("Starting Roster dashboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("HR API: {}", config.api.base_url);

    let client = HrClient::new(config.api.client_config())?;
    let state = AppState::new(Arc::new(client))?;

    serve(state, &config.server).await?;

    tracing::info!("Roster dashboard stopped");
    Ok(())
}

/// Initialize tracing with a pretty or JSON formatter
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter_directive().into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
