use crate::config::ServerConfig;
use crate::services::storage::{LocalStorageService, StorageService};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Prepares the upload directory, creating it when missing.
pub async fn setup_storage(config: &ServerConfig) -> Result<Arc<LocalStorageService>> {
    let storage = LocalStorageService::new(&config.upload_dir);

    let root = storage.root().display();
    if storage.is_available().await {
        info!("✅ Upload directory '{}' is ready", root);
    } else {
        info!("📂 Upload directory '{}' not found, creating...", root);
        storage.ensure_root().await?;
        info!("✅ Upload directory '{}' created", root);
    }

    Ok(Arc::new(storage))
}
