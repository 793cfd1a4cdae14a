//! Error types for the caching proxy
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Upstream Error Enum ==
/// Failure of a single upstream request attempt.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UpstreamError {
    /// Upstream answered 404 for the endpoint
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Upstream answered with a non-success status other than 404
    #[error("Upstream returned {status} for {endpoint}")]
    Status { status: u16, endpoint: String },

    /// The attempt exceeded the request timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Connection or transport level failure
    #[error("Network error: {0}")]
    Network(String),

    /// Body could not be decoded or lacks required fields
    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),
}

impl UpstreamError {
    /// Whether another attempt may succeed. Only 404s are terminal.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, UpstreamError::NotFound(_))
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        let target = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        if err.is_timeout() {
            UpstreamError::Timeout(target)
        } else if err.is_connect() {
            UpstreamError::Network(format!("Failed to connect to {}", target))
        } else if err.is_decode() {
            UpstreamError::InvalidResponse(err.to_string())
        } else {
            UpstreamError::Network(err.to_string())
        }
    }
}

// == App Error Enum ==
/// Error surfaced by the orchestrator to the endpoint layer.
#[derive(Error, Debug)]
pub enum AppError {
    /// Requested resource does not exist upstream
    #[error("{0}")]
    NotFound(String),

    /// Malformed caller input
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Upstream failure after retries were exhausted
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status reported to clients for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Upstream(UpstreamError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = Json(ErrorResponse::new(self.to_string(), status.as_u16()));
        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the caching proxy.
pub type Result<T> = std::result::Result<T, AppError>;
