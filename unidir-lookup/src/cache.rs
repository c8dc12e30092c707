//! In-memory cache for directory query results.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use unidir_core::types::UniversityRecord;

/// Payload stored under a cache key.
///
/// Search results and the distinct country list share one keyspace (the
/// country list lives under a fixed sentinel key), so the stored value is a
/// union of the two shapes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CachePayload {
    /// Normalized search results for one `(country, name)` query.
    Universities(Vec<UniversityRecord>),
    /// Distinct country names, sorted ascending.
    Countries(Vec<String>),
}

/// Cache entry: a payload plus the instant it was recorded.
#[derive(Clone)]
struct CacheEntry {
    payload: CachePayload,
    recorded_at: Instant,
}

/// In-memory store mapping derived query keys to recorded payloads.
///
/// The store itself has no expiry policy: `get` returns stale entries too,
/// along with their `recorded_at`, and the query service decides freshness.
/// Entries are replaced whole on `set`, so a concurrent reader sees either
/// the old entry or the new one, never a mix.
pub struct QueryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl QueryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Looks up a key, returning the payload and when it was recorded.
    ///
    /// Pure lookup: never blocks on I/O and never mutates the store.
    pub fn get(&self, key: &str) -> Option<(CachePayload, Instant)> {
        let entries = self.entries.read();
        entries
            .get(key)
            .map(|e| (e.payload.clone(), e.recorded_at))
    }

    /// Stores a payload under a key, replacing any prior entry.
    ///
    /// `recorded_at` is captured here, at write time. Once this returns,
    /// any subsequent `get` on the same key observes the new entry.
    pub fn set(&self, key: &str, payload: CachePayload) {
        let entry = CacheEntry {
            payload,
            recorded_at: Instant::now(),
        };
        self.entries.write().insert(key.to_string(), entry);
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Returns the number of entries, fresh and stale alike.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Returns entry counts, splitting fresh from stale for the given TTL.
    pub fn stats(&self, ttl: Duration) -> CacheStats {
        let entries = self.entries.read();
        let fresh = entries
            .values()
            .filter(|e| e.recorded_at.elapsed() < ttl)
            .count();
        CacheStats {
            total_entries: entries.len(),
            fresh_entries: fresh,
            stale_entries: entries.len().saturating_sub(fresh),
        }
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics.
#[derive(Clone, Debug)]
pub struct CacheStats {
    /// Total entries currently stored.
    pub total_entries: usize,
    /// Entries still within the TTL.
    pub fresh_entries: usize,
    /// Entries past the TTL, awaiting overwrite.
    pub stale_entries: usize,
}
