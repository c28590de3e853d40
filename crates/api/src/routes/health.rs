use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the presence log exists at the configured path.
    pub presence_log_available: bool,
}

/// GET /health -- returns service health and presence log availability.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let path = state.presence.path().to_path_buf();
    let presence_log_available = tokio::fs::try_exists(&path).await.unwrap_or(false);

    let status = if presence_log_available { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        presence_log_available,
    })
}

/// Mount health check routes (root level, not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
