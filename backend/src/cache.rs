//! Time-bounded cache for video recommendations
//!
//! The video catalog is quota-limited, so identical queries within the TTL
//! window are served from memory. The cache is an explicit component with an
//! injected clock (no globals, testable expiry), constructed once per process
//! and shared through [`crate::state::AppState`].
//!
//! Entries are evicted logically: a stale entry is ignored on read and only
//! replaced by the next successful fetch. There is no capacity bound; the
//! key space (content type x duration bucket) is small and bounded.

use chrono::{DateTime, Duration, Utc};
use fitjourney_shared::models::{DurationTag, VideoItem};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Source of "now", injectable so tests can control expiry
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time, used in production
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Cache key: one entry per (content type, duration bucket) pair
type CacheKey = (String, DurationTag);

struct CacheEntry {
    value: Vec<VideoItem>,
    created_at: DateTime<Utc>,
}

/// Key -> (value, timestamp) store with expiry-on-read
///
/// Supports concurrent reads; refreshes are last-writer-wins per key.
pub struct VideoCache {
    ttl: Duration,
    clock: Box<dyn Clock>,
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
}

impl VideoCache {
    pub fn new(ttl_secs: u64, clock: Box<dyn Clock>) -> Self {
        Self {
            ttl: Duration::seconds(ttl_secs as i64),
            clock,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Return the cached value when a fresh entry exists.
    ///
    /// A stale entry is treated as absent but left in place; it is only
    /// superseded by the next successful [`VideoCache::insert`].
    pub fn get(&self, content_type: &str, duration: DurationTag) -> Option<Vec<VideoItem>> {
        let entries = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let entry = entries.get(&(content_type.to_string(), duration))?;

        let age = self.clock.now() - entry.created_at;
        (age < self.ttl).then(|| entry.value.clone())
    }

    /// Store a successful fetch result with a fresh timestamp
    pub fn insert(&self, content_type: &str, duration: DurationTag, value: Vec<VideoItem>) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(
            (content_type.to_string(), duration),
            CacheEntry {
                value,
                created_at: self.clock.now(),
            },
        );
    }
}

#[cfg(test)]
impl VideoCache {
    /// Number of stored entries, stale included
    pub fn entry_count(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
