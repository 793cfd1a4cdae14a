//! Upstream transport
//!
//! A single HTTP GET returning decoded JSON. Retries live one layer up in
//! [`RetryPolicy`](super::RetryPolicy), so implementations make exactly one
//! attempt per call.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::error::UpstreamError;

/// One-shot JSON fetch from an absolute URL.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a single GET against `url`.
    ///
    /// 404 maps to [`UpstreamError::NotFound`]; any other non-2xx status maps
    /// to [`UpstreamError::Status`].
    async fn get_json(&self, url: &str) -> Result<Value, UpstreamError>;
}

/// reqwest-backed transport with a fixed per-request timeout.
///
/// The inner client pools connections and is shared by every concurrent fetch.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: HttpClient,
}

impl HttpTransport {
    /// Builds a transport whose every request is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, UpstreamError> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("swapi_cache/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<Value, UpstreamError> {
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?;

        let status = response.status();
        match status {
            StatusCode::NOT_FOUND => Err(UpstreamError::NotFound(url.to_string())),
            status if status.is_success() => Ok(response.json::<Value>().await?),
            status => Err(UpstreamError::Status {
                status: status.as_u16(),
                endpoint: url.to_string(),
            }),
        }
    }
}
