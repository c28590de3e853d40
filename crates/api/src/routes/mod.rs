pub mod health;
pub mod pages;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{admin, presence, users};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                                   directory users (GET)
/// /mean_time_weekday/{user_id}             mean presence per weekday (GET)
/// /presence_weekday/{user_id}              total presence per weekday (GET)
/// /presence_start_end/{user_id}            mean start/end per weekday (GET)
///
/// /admin/cache                             presence cache state (GET)
/// /admin/cache/reset                       drop cached presence log (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route(
            "/mean_time_weekday/{user_id}",
            get(presence::mean_time_weekday),
        )
        .route("/presence_weekday/{user_id}", get(presence::presence_weekday))
        .route(
            "/presence_start_end/{user_id}",
            get(presence::presence_start_end),
        )
        .route("/admin/cache", get(admin::cache_status))
        .route("/admin/cache/reset", post(admin::reset_cache))
}
