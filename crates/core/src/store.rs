//! Guarded, cached access to the presence log.
//!
//! [`PresenceStore`] composes the three pieces explicitly:
//! `Guard( TtlCache( read_presence_log ) )`. Every call takes the lock for
//! the full cache-check-or-reparse sequence, so at most one parse runs at a
//! time and a cache hit never observes a half-written entry.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::cache::{CacheState, TtlCache};
use crate::error::CoreError;
use crate::guard::Guard;
use crate::presence_log::read_presence_log;
use crate::types::{DatedIntervals, PresenceTable, UserId};

/// Cache key of the presence-log parse.
pub const GET_DATA_KEY: &str = "get_data";

/// Owns the presence log location and its cache.
///
/// Meant to be created once at startup and shared (`Arc`) with handlers.
#[derive(Debug)]
pub struct PresenceStore {
    path: PathBuf,
    cache: Guard<TtlCache<&'static str, Arc<PresenceTable>>>,
}

impl PresenceStore {
    pub fn new(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            path: path.into(),
            cache: Guard::new(TtlCache::new(ttl)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full presence table, parsed at most once per TTL window.
    ///
    /// Blocks while another caller holds the guard.
    pub fn get_data(&self) -> Result<Arc<PresenceTable>, CoreError> {
        self.get_data_at(Instant::now())
    }

    /// [`get_data`](Self::get_data) with an explicit clock reading.
    pub fn get_data_at(&self, now: Instant) -> Result<Arc<PresenceTable>, CoreError> {
        self.cache.run(|cache| {
            cache.get_or_compute_at(GET_DATA_KEY, now, || {
                tracing::info!(path = %self.path.display(), "Loading presence log");
                read_presence_log(&self.path).map(Arc::new)
            })
        })
    }

    /// One user's dated intervals, or `NotFound`.
    pub fn user_presence(&self, user_id: UserId) -> Result<DatedIntervals, CoreError> {
        let table = self.get_data()?;
        table.get(&user_id).cloned().ok_or_else(|| {
            tracing::debug!(user_id, "User not found in presence log");
            CoreError::user_not_found(user_id)
        })
    }

    /// Forget the cached table; the next read re-parses the log.
    pub fn reset(&self) {
        self.cache.run(|cache| cache.reset());
        tracing::info!("Presence cache reset");
    }

    pub fn cache_state(&self) -> CacheState {
        self.cache.run(|cache| cache.state(&GET_DATA_KEY))
    }
}
