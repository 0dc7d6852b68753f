use crate::api::error::AppError;
use crate::services::storage::StorageService;
use crate::utils::validation::sanitize_label;
use bytes::Bytes;
use chrono::{Local, NaiveDateTime};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Timestamp layout embedded in stored filenames, e.g. `20250101_093015`
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// One image received from a client
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub image: Bytes,
    pub label: String,
}

/// An image written to the upload directory
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub filename: String,
    pub path: PathBuf,
    pub size: u64,
}

/// Builds `image_<timestamp>[_<label>].jpg` for an upload received at `at`.
///
/// The label is sanitized here; an empty label yields no label segment.
pub fn stored_filename(label: &str, at: NaiveDateTime) -> String {
    let timestamp = at.format(TIMESTAMP_FORMAT);
    if label.is_empty() {
        format!("image_{}.jpg", timestamp)
    } else {
        format!("image_{}_{}.jpg", timestamp, sanitize_label(label))
    }
}

pub struct UploadService {
    storage: Arc<dyn StorageService>,
}

impl UploadService {
    pub fn new(storage: Arc<dyn StorageService>) -> Self {
        Self { storage }
    }

    /// Stores the image under a timestamped name.
    ///
    /// Same label within the same second maps to the same file; the later
    /// write wins.
    pub async fn store(&self, request: &UploadRequest) -> Result<StoredImage, AppError> {
        let filename = stored_filename(&request.label, Local::now().naive_local());
        let path = self.storage.path_for(&filename);

        let size = self.storage.save(&filename, &request.image).await?;

        info!("✅ Received image: {}", filename);
        info!("📁 Saved to: {}", path.display());
        info!("📊 File size: {} bytes", size);
        if !request.label.is_empty() {
            info!("🏷️  Label: {}", request.label);
        }
        if let Some(kind) = infer::get(&request.image) {
            debug!("🔍 Detected content type: {}", kind.mime_type());
        }

        Ok(StoredImage {
            filename,
            path,
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::LocalStorageService;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 2)
            .unwrap()
    }

    #[test]
    fn test_filename_without_label() {
        assert_eq!(stored_filename("", fixed_time()), "image_20250307_090502.jpg");
    }

    #[test]
    fn test_filename_with_label() {
        assert_eq!(
            stored_filename("Test 1", fixed_time()),
            "image_20250307_090502_Test_1.jpg"
        );
        assert_eq!(
            stored_filename("Café @ Home!", fixed_time()),
            "image_20250307_090502_Caf_Home.jpg"
        );
    }

    #[test]
    fn test_filename_label_cannot_escape_directory() {
        let name = stored_filename("../../secret", fixed_time());
        assert_eq!(name, "image_20250307_090502_secret.jpg");
        assert!(!name.contains('/'));
    }

    #[tokio::test]
    async fn test_store_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let service = UploadService::new(Arc::new(LocalStorageService::new(dir.path())));

        let request = UploadRequest {
            image: Bytes::from_static(&[1, 2, 3, 4, 5]),
            label: "Test 1".to_string(),
        };
        let stored = service.store(&request).await.unwrap();

        assert_eq!(stored.size, 5);
        assert!(stored.filename.starts_with("image_"));
        assert!(stored.filename.ends_with("_Test_1.jpg"));
        assert_eq!(stored.path, dir.path().join(&stored.filename));
        assert_eq!(std::fs::read(&stored.path).unwrap(), vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_store_reports_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let service = UploadService::new(Arc::new(LocalStorageService::new(
            dir.path().join("does-not-exist"),
        )));

        let request = UploadRequest {
            image: Bytes::from_static(b"data"),
            label: String::new(),
        };
        let err = service.store(&request).await.unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
