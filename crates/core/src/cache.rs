//! Time-to-live memoization keyed by operation identity.
//!
//! [`TtlCache`] holds at most one value per key together with the instant
//! it was computed. A value younger than the TTL is returned as-is; an
//! older one is recomputed and replaced. The cache does no locking of its
//! own; wrap it in a [`Guard`](crate::guard::Guard) to share it.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Default TTL for cached presence data (10 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

/// Lifecycle state of a single cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheState {
    /// Nothing computed yet, or reset since.
    Empty,
    /// Computed less than one TTL ago.
    Fresh,
    /// Computed at least one TTL ago; the next read recomputes.
    Stale,
}

/// A cached value and the instant it was computed.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    pub computed_at: Instant,
}

/// Per-key cache whose entries expire `ttl` after they were computed.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    ttl: Duration,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached value for `key`, computing it if absent or stale.
    pub fn get_or_compute<E, F>(&mut self, key: K, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        self.get_or_compute_at(key, Instant::now(), compute)
    }

    /// [`get_or_compute`](Self::get_or_compute) with an explicit clock reading.
    ///
    /// A failed computation stores nothing; a previous entry, stale or not,
    /// stays in place.
    pub fn get_or_compute_at<E, F>(&mut self, key: K, now: Instant, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(entry) = self.entries.get(&key) {
            if self.is_fresh(entry, now) {
                return Ok(entry.value.clone());
            }
        }

        let value = compute()?;
        self.entries.insert(
            key,
            CacheEntry {
                value: value.clone(),
                computed_at: now,
            },
        );
        Ok(value)
    }

    /// Lifecycle state of `key` at `now`.
    pub fn state_at(&self, key: &K, now: Instant) -> CacheState {
        match self.entries.get(key) {
            None => CacheState::Empty,
            Some(entry) if self.is_fresh(entry, now) => CacheState::Fresh,
            Some(_) => CacheState::Stale,
        }
    }

    pub fn state(&self, key: &K) -> CacheState {
        self.state_at(key, Instant::now())
    }

    /// Drop every entry, values and timestamps alike.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_fresh(&self, entry: &CacheEntry<V>, now: Instant) -> bool {
        now.saturating_duration_since(entry.computed_at) < self.ttl
    }
}
