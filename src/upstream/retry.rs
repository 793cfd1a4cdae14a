//! Retry policy for upstream requests
//!
//! Fixed-delay retries with a hard attempt cap. Terminal errors (404) return
//! immediately; everything else is retried until the cap is reached.

use std::future::Future;
use std::time::Duration;

use tracing::{error, warn};

use crate::error::UpstreamError;

/// Bounded fixed-delay retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Sleep between attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Runs `op` until it succeeds, fails terminally, or the attempt cap is hit.
    ///
    /// The last error is returned unchanged.
    pub async fn run<T, F, Fut>(&self, label: &str, mut op: F) -> Result<T, UpstreamError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, UpstreamError>>,
    {
        let mut attempt = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if !err.is_retryable() => return Err(err),
                Err(err) if attempt >= self.max_attempts => {
                    error!(
                        "Request to {} failed after {} attempts: {}",
                        label, attempt, err
                    );
                    return Err(err);
                }
                Err(err) => {
                    warn!(
                        "Request to {} failed (attempt {}/{}): {}",
                        label, attempt, self.max_attempts, err
                    );
                    tokio::time::sleep(self.delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
