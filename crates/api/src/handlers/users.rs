use axum::extract::State;
use axum::Json;
use presence_core::users::{load_directory, UserEntry};

use crate::error::AppResult;
use crate::handlers::run_blocking;
use crate::state::AppState;

/// GET /users -- directory users for the chart page dropdown.
///
/// Ordered by the configured [`UserOrdering`](presence_core::users::UserOrdering).
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserEntry>>> {
    let path = state.config.users_xml.clone();
    let ordering = state.config.users_order;

    let users = run_blocking(move || load_directory(&path, ordering)).await?;
    tracing::debug!(count = users.len(), "Listed directory users");

    Ok(Json(users))
}
