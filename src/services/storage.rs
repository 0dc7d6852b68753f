use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Destination for uploaded images
#[async_trait]
pub trait StorageService: Send + Sync {
    /// Writes `data` under `filename`, replacing any existing file.
    /// Returns the size of the stored file in bytes.
    async fn save(&self, filename: &str, data: &[u8]) -> Result<u64>;

    /// Location a file with this name is (or would be) stored at
    fn path_for(&self, filename: &str) -> PathBuf;

    /// Check if the storage backend is usable
    async fn is_available(&self) -> bool;
}

/// Stores files in a single flat directory on the local filesystem
pub struct LocalStorageService {
    root: PathBuf,
}

impl LocalStorageService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the storage directory if it does not exist yet
    pub async fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("Failed to create upload directory {}", self.root.display()))
    }
}

#[async_trait]
impl StorageService for LocalStorageService {
    async fn save(&self, filename: &str, data: &[u8]) -> Result<u64> {
        let path = self.path_for(filename);
        fs::write(&path, data).await?;
        let metadata = fs::metadata(&path).await?;
        Ok(metadata.len())
    }

    fn path_for(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    async fn is_available(&self) -> bool {
        fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_writes_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorageService::new(dir.path());

        let data = [0xFF, 0xD8, 0xFF, 0x00, 0x7F];
        let size = storage.save("image_test.jpg", &data).await.unwrap();

        assert_eq!(size, 5);
        let on_disk = std::fs::read(dir.path().join("image_test.jpg")).unwrap();
        assert_eq!(on_disk, data);
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorageService::new(dir.path());

        storage.save("same.jpg", b"first upload").await.unwrap();
        let size = storage.save("same.jpg", b"second").await.unwrap();

        assert_eq!(size, 6);
        assert_eq!(std::fs::read(dir.path().join("same.jpg")).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_ensure_root_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorageService::new(dir.path().join("nested").join("uploads"));

        assert!(!storage.is_available().await);
        storage.ensure_root().await.unwrap();
        assert!(storage.is_available().await);
        // Second call is a no-op
        storage.ensure_root().await.unwrap();
    }

    #[tokio::test]
    async fn test_save_fails_without_directory() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorageService::new(dir.path().join("missing"));

        assert!(storage.save("image.jpg", b"data").await.is_err());
    }
}
