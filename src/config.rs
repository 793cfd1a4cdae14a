//! Configuration Module
//!
//! Handles loading and managing proxy configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Proxy configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default TTL in seconds for cached results
    pub default_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the upstream API, without trailing slash
    pub swapi_base_url: String,
    /// Per-attempt upstream request timeout in seconds
    pub request_timeout: u64,
    /// Total upstream attempts per request, including the first
    pub max_attempts: u32,
    /// Fixed delay between upstream attempts in milliseconds
    pub retry_delay_ms: u64,
    /// Background sweep interval in seconds, 0 disables the task
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL` - Default TTL in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `SWAPI_BASE_URL` - Upstream base URL (default: https://swapi.dev/api)
    /// - `REQUEST_TIMEOUT` - Per-attempt timeout in seconds (default: 30)
    /// - `MAX_ATTEMPTS` - Upstream attempts per request (default: 3)
    /// - `RETRY_DELAY_MS` - Delay between attempts (default: 1000)
    /// - `CLEANUP_INTERVAL` - Background sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            default_ttl: parse_var::<u64>("DEFAULT_TTL")
                .filter(|ttl| *ttl > 0)
                .unwrap_or(defaults.default_ttl),
            server_port: parse_var::<u16>("SERVER_PORT").unwrap_or(defaults.server_port),
            swapi_base_url: env::var("SWAPI_BASE_URL")
                .ok()
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.swapi_base_url),
            request_timeout: parse_var::<u64>("REQUEST_TIMEOUT")
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.request_timeout),
            max_attempts: parse_var::<u32>("MAX_ATTEMPTS")
                .filter(|attempts| *attempts > 0)
                .unwrap_or(defaults.max_attempts),
            retry_delay_ms: parse_var::<u64>("RETRY_DELAY_MS").unwrap_or(defaults.retry_delay_ms),
            cleanup_interval: parse_var::<u64>("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
        }
    }

    /// Per-attempt timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Delay between attempts as a Duration.
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl: 300,
            server_port: 8000,
            swapi_base_url: "https://swapi.dev/api".to_string(),
            request_timeout: 30,
            max_attempts: 3,
            retry_delay_ms: 1000,
            cleanup_interval: 60,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
