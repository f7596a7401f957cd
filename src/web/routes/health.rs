//! Health Routes
//!
//! - GET /health/live - Liveness (process is alive)
//! - GET /health/ready - Readiness (HR API reachable)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::web::state::AppState;

/// Full health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    pub api_url: String,
    pub api_reachable: bool,
    pub uptime_seconds: u64,
    pub version: String,
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// The dashboard cannot render anything without the HR API.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if check_api(&state).await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let reachable = check_api(&state).await;

    Json(HealthResponse {
        status: if reachable { "healthy" } else { "degraded" }.to_string(),
        api_url: state.api.base_url().to_string(),
        api_reachable: reachable,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checked_at: chrono::Utc::now(),
    })
}

async fn check_api(state: &AppState) -> bool {
    match state.api.list_employees().await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "HR API health check failed");
            false
        }
    }
}
