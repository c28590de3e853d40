//! Handlers for per-user weekday presence statistics.
//!
//! Each handler fetches the user's dated intervals from the presence store
//! (404 if the user has no records) and reduces them to seven weekday rows
//! in the shape the chart pages consume.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use presence_core::types::{DatedIntervals, UserId};
use presence_core::weekday::{
    group_by_weekday, mean_seconds, starts_ends_mean_of_presence, weekday_abbr,
};
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::handlers::run_blocking;
use crate::state::AppState;

/// Header row of the weekday totals table.
pub const PRESENCE_WEEKDAY_HEADER: [&str; 2] = ["Weekday", "Presence (s)"];

async fn user_presence(state: &AppState, user_id: UserId) -> AppResult<DatedIntervals> {
    let store = Arc::clone(&state.presence);
    run_blocking(move || store.user_presence(user_id)).await
}

// ---------------------------------------------------------------------------
// GET /mean_time_weekday/{user_id}
// ---------------------------------------------------------------------------

/// Mean presence time per weekday: `[["Mon", 0], ["Tue", 30047.0], ...]`.
///
/// A weekday without observations reports integer `0`.
pub async fn mean_time_weekday(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> AppResult<Json<Vec<(&'static str, Value)>>> {
    let items = user_presence(&state, user_id).await?;

    let result = group_by_weekday(&items)
        .iter()
        .enumerate()
        .map(|(day, intervals)| {
            let mean = if intervals.is_empty() {
                json!(0)
            } else {
                json!(mean_seconds(intervals))
            };
            (weekday_abbr(day), mean)
        })
        .collect();

    Ok(Json(result))
}

// ---------------------------------------------------------------------------
// GET /presence_weekday/{user_id}
// ---------------------------------------------------------------------------

/// Total presence time per weekday, preceded by a header row:
/// `[["Weekday", "Presence (s)"], ["Mon", 0], ...]`.
pub async fn presence_weekday(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> AppResult<Json<Vec<Value>>> {
    let items = user_presence(&state, user_id).await?;

    let mut result = vec![json!(PRESENCE_WEEKDAY_HEADER)];
    result.extend(
        group_by_weekday(&items)
            .iter()
            .enumerate()
            .map(|(day, intervals)| json!([weekday_abbr(day), intervals.iter().sum::<i64>()])),
    );

    Ok(Json(result))
}

// ---------------------------------------------------------------------------
// GET /presence_start_end/{user_id}
// ---------------------------------------------------------------------------

/// Mean start and end times (whole seconds since midnight) per weekday:
/// `[["Mon", [33134, 57257]], ...]`.
pub async fn presence_start_end(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> AppResult<Json<Vec<(&'static str, [i64; 2])>>> {
    let items = user_presence(&state, user_id).await?;

    let result = starts_ends_mean_of_presence(&items)
        .iter()
        .map(|(&day, bucket)| {
            (
                weekday_abbr(day),
                [
                    mean_seconds(&bucket.starts) as i64,
                    mean_seconds(&bucket.ends) as i64,
                ],
            )
        })
        .collect();

    Ok(Json(result))
}
