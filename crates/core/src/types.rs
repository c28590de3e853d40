use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};

/// User identifiers as they appear in the presence log and the directory.
pub type UserId = i64;

/// Clock-in / clock-out times for one user on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presence {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// One user's presence keyed by calendar date (ascending).
pub type DatedIntervals = BTreeMap<NaiveDate, Presence>;

/// Full parsed presence log: user id -> date -> presence.
pub type PresenceTable = BTreeMap<UserId, DatedIntervals>;
