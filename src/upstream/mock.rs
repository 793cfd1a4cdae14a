//! Mock upstream transport for testing
//!
//! Serves scripted JSON per URL without making real requests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::Transport;
use crate::error::UpstreamError;

/// Scripted behaviour for one URL.
#[derive(Debug, Clone)]
struct Route {
    /// Errors returned by the first attempts, in order
    failures: VecDeque<UpstreamError>,
    /// Outcome once the failures are used up
    outcome: Result<Value, UpstreamError>,
}

/// Mock transport for testing.
///
/// Unknown URLs answer with [`UpstreamError::NotFound`].
///
/// # Example
/// ```ignore
/// let mock = MockTransport::new()
///     .with_json("https://swapi.test/api/films/", json!({"results": []}))
///     .with_failures("https://swapi.test/api/films/", 2, UpstreamError::Timeout("films/".into()));
/// ```
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<String, Route>>,
    calls: Mutex<HashMap<String, usize>>,
    latency: Duration,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `url` with `body`.
    pub fn with_json(mut self, url: &str, body: Value) -> Self {
        self.route(url).outcome = Ok(body);
        self
    }

    /// Answers `url` with `err` on every attempt.
    pub fn with_error(mut self, url: &str, err: UpstreamError) -> Self {
        self.route(url).outcome = Err(err);
        self
    }

    /// Fails the first `count` attempts on `url` with `err`.
    pub fn with_failures(mut self, url: &str, count: usize, err: UpstreamError) -> Self {
        let route = self.route(url);
        route.failures.extend(std::iter::repeat(err).take(count));
        self
    }

    /// Delays every response by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Number of attempts made against `url`.
    pub fn calls(&self, url: &str) -> usize {
        self.calls.lock().unwrap().get(url).copied().unwrap_or(0)
    }

    /// Number of attempts made against any URL.
    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    fn route(&mut self, url: &str) -> &mut Route {
        self.routes
            .get_mut()
            .unwrap()
            .entry(url.to_string())
            .or_insert_with(|| Route {
                failures: VecDeque::new(),
                outcome: Err(UpstreamError::NotFound(url.to_string())),
            })
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get_json(&self, url: &str) -> Result<Value, UpstreamError> {
        *self.calls.lock().unwrap().entry(url.to_string()).or_insert(0) += 1;

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let mut routes = self.routes.lock().unwrap();
        match routes.get_mut(url) {
            Some(route) => match route.failures.pop_front() {
                Some(err) => Err(err),
                None => route.outcome.clone(),
            },
            None => Err(UpstreamError::NotFound(url.to_string())),
        }
    }
}
