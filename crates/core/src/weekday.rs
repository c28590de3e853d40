//! Weekday aggregation of a single user's presence.
//!
//! Pure logic: callers look up a user's [`DatedIntervals`] in the presence
//! table and pass them in. Weekdays are indexed Monday = 0 .. Sunday = 6.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveTime, Timelike};
use serde::Serialize;

use crate::types::DatedIntervals;

/// Number of weekday buckets.
pub const DAYS_IN_WEEK: usize = 7;

/// Display abbreviations, Monday first. Not locale dependent.
pub const WEEKDAY_ABBREVIATIONS: [&str; DAYS_IN_WEEK] =
    ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Interval seconds per weekday, Monday first.
pub type WeekdayBuckets = [Vec<i64>; DAYS_IN_WEEK];

/// Raw start and end times (seconds since midnight) observed on one weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StartsEnds {
    pub starts: Vec<i64>,
    pub ends: Vec<i64>,
}

/// Start/end observations keyed by weekday index. All seven keys are present.
pub type StartEndBuckets = BTreeMap<usize, StartsEnds>;

/// Seconds elapsed since midnight for a time of day.
pub fn seconds_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 3600 + i64::from(time.minute()) * 60 + i64::from(time.second())
}

/// Signed number of seconds from `start` to `end`.
///
/// Negative when `end` is earlier than `start`; no clamping.
pub fn interval(start: NaiveTime, end: NaiveTime) -> i64 {
    seconds_since_midnight(end) - seconds_since_midnight(start)
}

/// Arithmetic mean; `0.0` for an empty slice.
pub fn mean(items: &[f64]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    items.iter().sum::<f64>() / items.len() as f64
}

/// [`mean`] over whole seconds.
pub fn mean_seconds(items: &[i64]) -> f64 {
    let values: Vec<f64> = items.iter().map(|&s| s as f64).collect();
    mean(&values)
}

/// Display abbreviation for a weekday index (`0` is Monday).
///
/// Panics if `index` is not below [`DAYS_IN_WEEK`].
pub fn weekday_abbr(index: usize) -> &'static str {
    WEEKDAY_ABBREVIATIONS[index]
}

/// Group presence intervals by weekday.
pub fn group_by_weekday(items: &DatedIntervals) -> WeekdayBuckets {
    let mut result: WeekdayBuckets = Default::default();
    for (date, presence) in items {
        let day = date.weekday().num_days_from_monday() as usize;
        result[day].push(interval(presence.start, presence.end));
    }
    result
}

/// Collect start and end times (seconds since midnight) by weekday.
pub fn starts_ends_mean_of_presence(items: &DatedIntervals) -> StartEndBuckets {
    let mut result: StartEndBuckets = (0..DAYS_IN_WEEK)
        .map(|day| (day, StartsEnds::default()))
        .collect();

    for (date, presence) in items {
        let day = date.weekday().num_days_from_monday() as usize;
        let bucket = result.entry(day).or_default();
        bucket.starts.push(seconds_since_midnight(presence.start));
        bucket.ends.push(seconds_since_midnight(presence.end));
    }
    result
}
