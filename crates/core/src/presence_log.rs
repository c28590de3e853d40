//! Presence log parsing.
//!
//! The log is a comma-delimited file with one record per line:
//! `user_id,YYYY-MM-DD,HH:MM:SS,HH:MM:SS`. Lines with any other field count
//! (headers, footers, blank lines) are not data and are skipped silently.
//! Lines with four fields that fail to parse are logged at debug level and
//! skipped; a bad line never contributes a record.

use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};

use crate::error::CoreError;
use crate::types::{Presence, PresenceTable, UserId};

/// Number of fields in a data line.
pub const FIELD_COUNT: usize = 4;

/// `chrono` format for the date column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// `chrono` format for the start/end columns.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// A single parsed line of the presence log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceRecord {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub presence: Presence,
}

/// Why a four-field line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),
    #[error("invalid user id {0:?}")]
    UserId(String),
    #[error("invalid date {0:?}")]
    Date(String),
    #[error("invalid start time {0:?}")]
    Start(String),
    #[error("invalid end time {0:?}")]
    End(String),
}

/// Read and parse the presence log at `path`.
///
/// Only a failure to read the file is an error; malformed content never is.
pub fn read_presence_log(path: &Path) -> Result<PresenceTable, CoreError> {
    let contents = fs::read_to_string(path).map_err(|source| CoreError::Source {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_presence_log(&contents);
    tracing::debug!(path = %path.display(), users = table.len(), "Parsed presence log");
    Ok(table)
}

/// Parse presence log contents into a [`PresenceTable`].
///
/// A repeated `(user_id, date)` pair overwrites the earlier record.
pub fn parse_presence_log(contents: &str) -> PresenceTable {
    let mut table = PresenceTable::new();

    for (index, line) in contents.lines().enumerate() {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != FIELD_COUNT {
            continue;
        }

        match parse_record(&fields) {
            Ok(record) => {
                table
                    .entry(record.user_id)
                    .or_default()
                    .insert(record.date, record.presence);
            }
            Err(e) => {
                tracing::debug!(line = index + 1, error = %e, "Skipping malformed presence line");
            }
        }
    }

    table
}

/// Parse the four fields of a data line.
pub fn parse_record(fields: &[&str]) -> Result<PresenceRecord, LineError> {
    let [user_id, date, start, end] = fields else {
        return Err(LineError::FieldCount(fields.len()));
    };

    let user_id = user_id
        .parse::<UserId>()
        .map_err(|_| LineError::UserId((*user_id).to_string()))?;
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| LineError::Date((*date).to_string()))?;
    let start = NaiveTime::parse_from_str(start, TIME_FORMAT)
        .map_err(|_| LineError::Start((*start).to_string()))?;
    let end = NaiveTime::parse_from_str(end, TIME_FORMAT)
        .map_err(|_| LineError::End((*end).to_string()))?;

    Ok(PresenceRecord {
        user_id,
        date,
        presence: Presence { start, end },
    })
}
