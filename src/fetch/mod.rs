//! Pluggable byte fetchers.
//!
//! [`HttpFetcher`] is the real network client. Implement [`Fetcher`] to
//! serve pages and images from somewhere else, e.g. fixtures in tests.

mod http;

pub use http::HttpFetcher;

use std::future::Future;

use url::Url;

/// Why a URL produced no content.
///
/// Callers treat every variant the same way ("unavailable"); the variants
/// exist so the reason can be logged and asserted on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// The request did not complete within the configured timeout.
    #[error("timed out")]
    Timeout,

    /// Connection, TLS, redirect or body read failure.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Trait for sources that can download the body behind a URL.
///
/// # Implementing a custom fetcher
///
/// ```rust,no_run
/// use fullsize_grabber::{FetchError, Fetcher};
/// use url::Url;
///
/// struct Offline;
///
/// impl Fetcher for Offline {
///     async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
///         Err(FetchError::Transport(format!("offline: {url}")))
///     }
/// }
/// ```
pub trait Fetcher: Send + Sync {
    /// Download the full body of `url`. Must not panic on network trouble;
    /// every failure is a [`FetchError`].
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}
