//! Cache administration endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use presence_core::cache::CacheState;
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::run_blocking;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CacheStatusResponse {
    pub state: CacheState,
    pub ttl_secs: u64,
}

/// GET /admin/cache -- lifecycle state of the presence cache.
pub async fn cache_status(State(state): State<AppState>) -> AppResult<Json<CacheStatusResponse>> {
    let store = Arc::clone(&state.presence);
    let cache_state = run_blocking(move || Ok(store.cache_state())).await?;

    Ok(Json(CacheStatusResponse {
        state: cache_state,
        ttl_secs: state.config.cache_ttl.as_secs(),
    }))
}

/// POST /admin/cache/reset -- drop the cached presence table.
pub async fn reset_cache(State(state): State<AppState>) -> AppResult<StatusCode> {
    let store = Arc::clone(&state.presence);
    run_blocking(move || {
        store.reset();
        Ok(())
    })
    .await?;

    Ok(StatusCode::NO_CONTENT)
}
