//! Cache Module
//!
//! Provides the in-memory expiring cache behind the upstream orchestrator.

mod entry;
mod stats;
mod store;


use std::sync::Arc;

use tokio::sync::Mutex;

// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::{format_timestamp, CacheHealth, CacheStats, EntryStats};
pub use store::CacheStore;

/// Process-wide cache handle. All operations are serialized by one lock.
pub type SharedCache = Arc<Mutex<CacheStore>>;

/// Wraps a store into a [`SharedCache`].
pub fn shared(store: CacheStore) -> SharedCache {
    Arc::new(Mutex::new(store))
}
