//! Pluggable storage backends for saved images.
//!
//! The crate ships with [`FsStorage`], which writes into a local directory
//! and never overwrites an existing file. Implement the [`Storage`] trait to
//! add your own backend.

mod fs;

pub use fs::FsStorage;

use std::future::Future;

use crate::error::Result;

/// Trait for storage backends that can persist image bytes.
///
/// # Implementing a custom backend
///
/// ```rust,no_run
/// use fullsize_grabber::{Result, Storage};
///
/// struct Discard;
///
/// impl Storage for Discard {
///     async fn put(&self, name: &str, _content: &[u8]) -> Result<String> {
///         Ok(name.to_string())
///     }
/// }
/// ```
pub trait Storage: Send + Sync {
    /// Get the backend ready for writes, e.g. create the target directory.
    /// Called once before the first [`put`](Self::put).
    fn prepare(&self) -> impl Future<Output = Result<()>> + Send {
        async { Ok(()) }
    }

    /// Persist `content` under `name`, or under a disambiguated variant of it
    /// if `name` is taken. Returns the name actually used.
    fn put(&self, name: &str, content: &[u8]) -> impl Future<Output = Result<String>> + Send;
}
