//! Error types for the `fullsize_grabber` crate.

use crate::fetch::FetchError;

/// Errors that abort a grabbing run.
///
/// Per-image failures never show up here; they are reported through
/// [`AttemptOutcome`](crate::AttemptOutcome) and
/// [`Resolution`](crate::Resolution) and the run carries on.
#[derive(Debug, thiserror::Error)]
pub enum GrabberError {
    /// The start page could not be fetched. Secondary pages are skipped
    /// instead.
    #[error("Start page {url} unavailable: {source}")]
    StartPage {
        url: String,
        #[source]
        source: FetchError,
    },

    /// A storage backend failed to persist an image.
    #[error("Storage write failed: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// The builder configuration is invalid.
    #[error("Config error: {0}")]
    Config(String),
}

/// A type alias for `Result<T, GrabberError>`.
pub type Result<T> = std::result::Result<T, GrabberError>;
