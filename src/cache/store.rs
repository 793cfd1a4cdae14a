//! Cache Store Module
//!
//! Key/value table with per-entry TTL, access accounting and lazy expiry.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, info};

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheHealth, CacheStats, EntryStats};

// == Cache Store ==
/// In-memory cache table.
///
/// Expired entries are purged lazily: every read-side operation first sweeps
/// the whole table, so no caller ever observes a value past its expiry.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Default TTL in seconds for entries without explicit TTL
    default_ttl: u64,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty CacheStore.
    ///
    /// # Arguments
    /// * `default_ttl` - TTL in seconds for entries stored without one
    pub fn new(default_ttl: u64) -> Self {
        debug_assert!(default_ttl > 0, "default TTL must be positive");
        info!("Cache store initialized with {}s TTL", default_ttl);
        Self {
            entries: HashMap::new(),
            default_ttl,
        }
    }

    /// Returns the default TTL in seconds.
    pub fn default_ttl(&self) -> u64 {
        self.default_ttl
    }

    // == Set ==
    /// Stores a value, replacing any existing entry and resetting its counters.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The payload to store
    /// * `ttl` - TTL in seconds (uses default_ttl if None); must be positive
    pub fn set(&mut self, key: impl Into<String>, value: Value, ttl: Option<u64>) {
        self.set_at(key.into(), value, ttl, current_timestamp_ms());
    }

    fn set_at(&mut self, key: String, value: Value, ttl: Option<u64>, now: u64) {
        let ttl = ttl.unwrap_or(self.default_ttl);
        debug_assert!(ttl > 0, "TTL must be positive");

        debug!("Cached: {} (TTL: {}s)", key, ttl);
        self.entries.insert(key, CacheEntry::new_at(value, ttl, now));
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Purges every expired entry first. On a hit the entry's access counter
    /// and last-access time are updated.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        self.get_at(key, current_timestamp_ms())
    }

    fn get_at(&mut self, key: &str, now: u64) -> Option<Value> {
        self.purge_expired_at(now);

        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.record_access(now);
                debug!("Cache hit: {} (accessed {} times)", key, entry.access_count);
                Some(entry.value.clone())
            }
            None => {
                debug!("Cache miss: {}", key);
                None
            }
        }
    }

    // == Delete ==
    /// Removes an entry by key, returning whether it existed.
    pub fn delete(&mut self, key: &str) -> bool {
        let existed = self.entries.remove(key).is_some();
        if existed {
            debug!("Deleted cache entry: {}", key);
        }
        existed
    }

    // == Clear ==
    /// Empties the table and returns the number of entries removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        info!("Cleared entire cache ({} entries)", removed);
        removed
    }

    // == Stats ==
    /// Returns per-entry diagnostics after purging expired entries.
    pub fn stats(&mut self) -> CacheStats {
        self.stats_at(current_timestamp_ms())
    }

    fn stats_at(&mut self, now: u64) -> CacheStats {
        self.purge_expired_at(now);

        CacheStats {
            total_entries: self.entries.len(),
            default_ttl: self.default_ttl,
            entries: self
                .entries
                .iter()
                .map(|(key, entry)| (key.clone(), EntryStats::from_entry(entry, now)))
                .collect(),
        }
    }

    // == Health Check ==
    /// Reports liveness after purging expired entries.
    pub fn health_check(&mut self) -> CacheHealth {
        self.purge_expired();
        CacheHealth::healthy(self.entries.len(), self.default_ttl)
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        self.purge_expired_at(current_timestamp_ms())
    }

    fn purge_expired_at(&mut self, now: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, entry| {
            let keep = !entry.is_expired_at(now);
            if !keep {
                debug!("Removed expired cache entry: {}", key);
            }
            keep
        });

        let removed = before - self.entries.len();
        if removed > 0 {
            info!("Cleaned up {} expired cache entries", removed);
        }
        removed
    }

    // == Length ==
    /// Returns the number of physically stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
