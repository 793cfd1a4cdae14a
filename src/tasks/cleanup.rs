//! Expiry Sweep Task
//!
//! Background task that periodically purges expired cache entries. Reads
//! already purge lazily; this only bounds how long dead entries occupy memory
//! between requests.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Spawns a background task that periodically purges expired cache entries.
///
/// The lock is held only for the synchronous sweep, never across the sleep.
///
/// # Arguments
/// * `cache` - Shared cache handle
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = shared(CacheStore::new(300));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), 60);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(cache: SharedCache, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.lock().await.purge_expired();

            if removed == 0 {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}
