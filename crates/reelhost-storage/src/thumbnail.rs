//! Thumbnail serving strategies.
//!
//! Two deployment modes exist for accepted thumbnails: embed the bytes as a
//! base64 data URI directly in the record, or write them under a local
//! asset root and serve a locally-rooted URL. Only one mode is active per
//! deployment; the sink is selected from configuration at startup rather
//! than branched on inside handlers.

use crate::traits::{StorageError, StorageResult};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reelhost_core::{Config, MediaFormat, ThumbnailStorage};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use uuid::Uuid;

/// Destination for accepted thumbnail bytes.
///
/// `store` consumes the staged bytes and returns the reference to persist
/// on the owning record (a URL or a data URI).
#[async_trait]
pub trait ThumbnailSink: Send + Sync {
    async fn store(
        &self,
        video_id: Uuid,
        format: &MediaFormat,
        data: Vec<u8>,
    ) -> StorageResult<String>;
}

/// Inline mode: no external file, the reference field carries the bytes.
pub struct InlineThumbnailSink;

#[async_trait]
impl ThumbnailSink for InlineThumbnailSink {
    async fn store(
        &self,
        video_id: Uuid,
        format: &MediaFormat,
        data: Vec<u8>,
    ) -> StorageResult<String> {
        let encoded = STANDARD.encode(&data);
        tracing::debug!(
            video_id = %video_id,
            media_type = %format.media_type,
            size_bytes = data.len(),
            "Encoded thumbnail as data URI"
        );
        Ok(format!("data:{};base64,{}", format.media_type, encoded))
    }
}

/// On-disk mode: write to `<assets_root>/<video_id>.<ext>` and serve via a
/// locally-rooted URL.
pub struct OnDiskThumbnailSink {
    assets_root: PathBuf,
    base_url: String,
}

impl OnDiskThumbnailSink {
    pub async fn new(assets_root: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let assets_root = assets_root.into();

        fs::create_dir_all(&assets_root).await.map_err(|e| {
            StorageError::Config(format!(
                "Failed to create asset root {}: {}",
                assets_root.display(),
                e
            ))
        })?;

        Ok(OnDiskThumbnailSink {
            assets_root,
            base_url,
        })
    }

    fn file_name(video_id: Uuid, format: &MediaFormat) -> String {
        format!("{}.{}", video_id, format.extension)
    }
}

#[async_trait]
impl ThumbnailSink for OnDiskThumbnailSink {
    async fn store(
        &self,
        video_id: Uuid,
        format: &MediaFormat,
        data: Vec<u8>,
    ) -> StorageResult<String> {
        let file_name = Self::file_name(video_id, format);
        let path = self.assets_root.join(&file_name);

        fs::write(&path, &data).await?;

        tracing::info!(
            video_id = %video_id,
            path = %path.display(),
            size_bytes = data.len(),
            "Thumbnail written to asset root"
        );

        Ok(format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            file_name
        ))
    }
}

/// Create the thumbnail sink selected by configuration.
pub async fn create_thumbnail_sink(config: &Config) -> StorageResult<Arc<dyn ThumbnailSink>> {
    match config.thumbnail_storage {
        ThumbnailStorage::Inline => Ok(Arc::new(InlineThumbnailSink)),
        ThumbnailStorage::OnDisk => {
            let sink =
                OnDiskThumbnailSink::new(&config.assets_root, config.assets_base_url.clone())
                    .await?;
            Ok(Arc::new(sink))
        }
    }
}
