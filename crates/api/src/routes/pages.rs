//! Route definitions for the chart pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Page routes mounted at the root.
///
/// ```text
/// GET /                        -> redirect to /presence_weekday
/// GET /presence_weekday        -> presence_weekday
/// GET /mean_time_weekday       -> mean_time_weekday
/// GET /presence_start_end      -> presence_start_end
/// GET /static/js/presence.js   -> presence_js
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/presence_weekday", get(pages::presence_weekday))
        .route("/mean_time_weekday", get(pages::mean_time_weekday))
        .route("/presence_start_end", get(pages::presence_start_end))
        .route("/static/js/presence.js", get(pages::presence_js))
}
