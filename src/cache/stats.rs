//! Cache Statistics Module
//!
//! Diagnostic snapshots of the cache table. None of these values drive eviction.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cache::CacheEntry;

// == Entry Stats ==
/// Per-entry diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryStats {
    /// Creation time (RFC 3339)
    pub created_at: String,
    /// Expiration time (RFC 3339)
    pub expires_at: String,
    /// Seconds until expiry, rounded to two decimals, never negative
    pub remaining_ttl: f64,
    /// Number of successful reads
    pub access_count: u64,
    /// Time of the most recent read (RFC 3339)
    pub last_accessed: Option<String>,
    /// Rough payload size in bytes
    pub data_size: usize,
}

impl EntryStats {
    /// Builds a snapshot of `entry` as seen at `now` (Unix milliseconds).
    pub fn from_entry(entry: &CacheEntry, now: u64) -> Self {
        let remaining_ms = entry.ttl_remaining_ms_at(now);
        Self {
            created_at: format_timestamp(entry.created_at),
            expires_at: format_timestamp(entry.expires_at),
            remaining_ttl: (remaining_ms as f64 / 10.0).round() / 100.0,
            access_count: entry.access_count,
            last_accessed: entry.last_accessed_at.map(format_timestamp),
            data_size: entry.approx_size(),
        }
    }
}

// == Cache Stats ==
/// Snapshot of the whole table after purging expired entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of live entries
    pub total_entries: usize,
    /// Default TTL in seconds
    pub default_ttl: u64,
    /// Diagnostics keyed by cache key
    pub entries: BTreeMap<String, EntryStats>,
}

// == Cache Health ==
/// Liveness report. The cache has no degraded state, so status is always "healthy".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheHealth {
    pub status: String,
    pub active_entries: usize,
    pub default_ttl: u64,
    pub timestamp: String,
}

impl CacheHealth {
    pub fn healthy(active_entries: usize, default_ttl: u64) -> Self {
        Self {
            status: "healthy".to_string(),
            active_entries,
            default_ttl,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Formats Unix milliseconds as RFC 3339.
pub fn format_timestamp(ms: u64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms as i64)
        .unwrap_or_default()
        .to_rfc3339()
}
