//! Storage setup and initialization

use anyhow::Result;
use std::sync::Arc;
use voiceform_core::Config;
use voiceform_storage::{LocalStorage, Storage};

/// Create the upload storage sink, creating the upload directory if it
/// does not exist yet.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage = LocalStorage::new(&config.upload_dir).await?;

    tracing::info!(
        upload_dir = %storage.base_path().display(),
        "Upload storage initialized"
    );

    Ok(Arc::new(storage))
}
