//! Upstream client
//!
//! Resolves endpoint paths against the base URL and wraps every transport
//! call in the retry policy.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{HttpTransport, RetryPolicy, Transport};
use crate::config::Config;
use crate::error::UpstreamError;

/// Retrying JSON client for the upstream API.
#[derive(Clone)]
pub struct UpstreamClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    retry: RetryPolicy,
}

impl UpstreamClient {
    pub fn new(transport: Arc<dyn Transport>, base_url: impl Into<String>, retry: RetryPolicy) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
            retry,
        }
    }

    /// Builds a reqwest-backed client from configuration.
    pub fn from_config(config: &Config) -> Result<Self, UpstreamError> {
        let transport = HttpTransport::new(config.request_timeout())?;
        Ok(Self::new(
            Arc::new(transport),
            config.swapi_base_url.clone(),
            RetryPolicy::new(config.max_attempts, config.retry_delay()),
        ))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turns an endpoint path or an absolute reference URL into a request URL.
    pub fn resolve(&self, reference: &str) -> String {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            reference.to_string()
        } else {
            format!("{}/{}", self.base_url, reference.trim_start_matches('/'))
        }
    }

    // == Fetch ==
    /// Fetches raw JSON with retries.
    pub async fn fetch(&self, reference: &str) -> Result<Value, UpstreamError> {
        let url = self.resolve(reference);
        self.retry
            .run(&url, || self.transport.get_json(&url))
            .await
    }

    /// Fetches and decodes into `T`. Decoding failures are not retried.
    pub async fn fetch_as<T: DeserializeOwned>(&self, reference: &str) -> Result<T, UpstreamError> {
        let value = self.fetch(reference).await?;
        serde_json::from_value(value).map_err(|e| {
            UpstreamError::InvalidResponse(format!("{}: {}", self.resolve(reference), e))
        })
    }
}

impl std::fmt::Debug for UpstreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamClient")
            .field("base_url", &self.base_url)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}
