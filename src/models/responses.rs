//! Response DTOs for the proxy API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheHealth;
use crate::models::Film;

/// Response body for `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub may_the_force_be_with_you: bool,
    /// Available endpoints
    pub endpoints: Vec<String>,
}

impl RootResponse {
    pub fn welcome() -> Self {
        Self {
            message: "🌟 Welcome to the Star Wars API Wrapper!".to_string(),
            may_the_force_be_with_you: true,
            endpoints: vec![
                "/films".to_string(),
                "/films/{film_id}/characters".to_string(),
                "/films/{film_id}/starships".to_string(),
                "/health".to_string(),
                "/cache/stats".to_string(),
            ],
        }
    }
}

/// Response body for `GET /films`
#[derive(Debug, Clone, Serialize)]
pub struct FilmListResponse {
    /// Number of films returned
    pub count: usize,
    pub message: String,
    pub results: Vec<Film>,
}

impl FilmListResponse {
    pub fn new(results: Vec<Film>) -> Self {
        Self {
            count: results.len(),
            message: "Successfully retrieved all films".to_string(),
            results,
        }
    }
}

/// Response body for `GET /films/:film_id/{characters,starships}`
#[derive(Debug, Clone, Serialize)]
pub struct FilmChildrenResponse<T> {
    /// Number of records returned
    pub count: usize,
    /// Film the records were fetched for
    pub film_id: u32,
    pub message: String,
    pub results: Vec<T>,
}

impl<T> FilmChildrenResponse<T> {
    /// Creates a response; `kind` names the record type in the message.
    pub fn new(film_id: u32, kind: &str, results: Vec<T>) -> Self {
        Self {
            count: results.len(),
            film_id,
            message: format!("Successfully retrieved {} for film {}", kind, film_id),
            results,
        }
    }
}

/// Response body for `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Cache health report
    pub cache: CacheHealth,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a healthy response embedding the cache report
    pub fn healthy(cache: CacheHealth) -> Self {
        Self {
            status: "healthy".to_string(),
            cache,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for `DELETE /cache`
#[derive(Debug, Clone, Serialize)]
pub struct ClearCacheResponse {
    pub message: String,
    /// Entries removed
    pub removed: usize,
}

impl ClearCacheResponse {
    pub fn new(removed: usize) -> Self {
        Self {
            message: format!("Cleared {} cache entries", removed),
            removed,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub detail: String,
    pub status_code: u16,
    pub timestamp: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse stamped with the current time
    pub fn new(detail: impl Into<String>, status_code: u16) -> Self {
        Self {
            detail: detail.into(),
            status_code,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
