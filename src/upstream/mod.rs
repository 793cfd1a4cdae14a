//! Upstream Module
//!
//! HTTP access to the remote API: a one-shot transport, a retry policy, and
//! the client combining them.

mod client;
#[cfg(test)]
pub mod mock;
mod retry;
mod transport;

pub use client::UpstreamClient;
#[cfg(test)]
pub use mock::MockTransport;
pub use retry::RetryPolicy;
pub use transport::{HttpTransport, Transport};
