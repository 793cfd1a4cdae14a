//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL and access accounting.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Value,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
    /// TTL the entry was stored with, in seconds
    pub ttl: u64,
    /// Number of successful reads
    pub access_count: u64,
    /// Timestamp of the most recent read (Unix milliseconds)
    pub last_accessed_at: Option<u64>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_seconds` from now.
    pub fn new(value: Value, ttl_seconds: u64) -> Self {
        Self::new_at(value, ttl_seconds, current_timestamp_ms())
    }

    /// Creates a new cache entry as if stored at `now` (Unix milliseconds).
    pub fn new_at(value: Value, ttl_seconds: u64, now: u64) -> Self {
        Self {
            value,
            created_at: now,
            expires_at: now.saturating_add(ttl_seconds.saturating_mul(1000)),
            ttl: ttl_seconds,
            access_count: 0,
            last_accessed_at: None,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// Boundary condition: an entry is expired once `now >= expires_at`, so a
    /// value is never served at or past its expiration instant.
    pub fn is_expired_at(&self, now: u64) -> bool {
        now >= self.expires_at
    }

    /// Checks if the entry has expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    // == Record Access ==
    /// Bumps the access counter and stamps the access time.
    pub fn record_access(&mut self, now: u64) {
        self.access_count += 1;
        self.last_accessed_at = Some(now);
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds at `now`, saturating at zero.
    pub fn ttl_remaining_ms_at(&self, now: u64) -> u64 {
        self.expires_at.saturating_sub(now)
    }

    /// Returns remaining TTL in seconds, saturating at zero.
    pub fn ttl_remaining(&self) -> f64 {
        self.ttl_remaining_ms_at(current_timestamp_ms()) as f64 / 1000.0
    }

    // == Approximate Size ==
    /// Rough payload size: length of the serialized JSON.
    pub fn approx_size(&self) -> usize {
        self.value.to_string().len()
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
