//! Presence analyzer core: presence log parsing, weekday aggregation, the
//! TTL cache and its guard, and the user directory.
//!
//! No HTTP here; the api crate wires these into handlers.

pub mod cache;
pub mod error;
pub mod guard;
pub mod presence_log;
pub mod store;
pub mod types;
pub mod users;
pub mod weekday;
