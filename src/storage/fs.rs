//! Filesystem storage backend.

use std::path::{Path, PathBuf};

use crate::error::{GrabberError, Result};
use crate::naming::with_counter;
use crate::storage::Storage;

/// Storage backend that writes files into one local directory.
///
/// The directory (and its parents) is created by [`Storage::prepare`]. When a
/// name is already taken, `_2`, `_3`, ... is inserted before the extension
/// until a free name is found. Writes are plain create-or-truncate.
///
/// # Example
///
/// ```rust,no_run
/// use fullsize_grabber::FsStorage;
///
/// let storage = FsStorage::new("starstyle-olivia-images");
/// ```
pub struct FsStorage {
    base_dir: PathBuf,
}

impl FsStorage {
    /// Create a new `FsStorage` rooted at the given directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    async fn free_path(&self, name: &str) -> Result<PathBuf> {
        let mut path = self.base_dir.join(name);
        let mut counter = 2;
        while tokio::fs::try_exists(&path).await.map_err(storage_err)? {
            path = self.base_dir.join(with_counter(name, counter));
            counter += 1;
        }
        Ok(path)
    }
}

impl Storage for FsStorage {
    async fn prepare(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.base_dir)
            .await
            .map_err(storage_err)
    }

    async fn put(&self, name: &str, content: &[u8]) -> Result<String> {
        let path = self.free_path(name).await?;

        tokio::fs::write(&path, content).await.map_err(storage_err)?;

        tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.to_string()))
    }
}

fn storage_err(e: std::io::Error) -> GrabberError {
    GrabberError::Storage(Box::new(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[tokio::test]
    async fn prepare_creates_nested_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("a/b/images");
        let storage = FsStorage::new(&dir);
        storage.prepare().await.unwrap();
        assert!(dir.is_dir());
        // Idempotent.
        storage.prepare().await.unwrap();
    }

    #[tokio::test]
    async fn collisions_get_numbered() {
        let tmp = TempDir::new().unwrap();
        let storage = FsStorage::new(tmp.path());

        assert_eq!(storage.put("photo.jpg", b"one").await.unwrap(), "photo.jpg");
        assert_eq!(storage.put("photo.jpg", b"two").await.unwrap(), "photo_2.jpg");
        assert_eq!(storage.put("photo.jpg", b"three").await.unwrap(), "photo_3.jpg");

        assert_eq!(std::fs::read(tmp.path().join("photo.jpg")).unwrap(), b"one");
        assert_eq!(std::fs::read(tmp.path().join("photo_2.jpg")).unwrap(), b"two");
        assert_eq!(std::fs::read(tmp.path().join("photo_3.jpg")).unwrap(), b"three");
    }

    #[tokio::test]
    async fn pre_existing_file_is_not_overwritten() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("look.png"), b"old").unwrap();
        let storage = FsStorage::new(tmp.path());

        let name = storage.put("look.png", b"new").await.unwrap();
        assert_eq!(name, "look_2.png");
        assert_eq!(std::fs::read(tmp.path().join("look.png")).unwrap(), b"old");
    }

    #[tokio::test]
    async fn write_into_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let storage = FsStorage::new(tmp.path().join("never-created"));
        let err = storage.put("x.jpg", b"x").await.unwrap_err();
        assert!(matches!(err, GrabberError::Storage(_)));
    }
}
