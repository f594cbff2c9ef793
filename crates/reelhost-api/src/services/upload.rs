//! Multipart field ingestion with byte-budget enforcement.
//!
//! Small uploads (thumbnails) are buffered in memory; large uploads
//! (videos) are staged to a temporary file so the body never has to fit
//! in memory. Both paths enforce the configured cap while streaming, so
//! an oversized request is rejected as soon as the budget is exceeded
//! rather than after buffering the whole body.

use axum::extract::Multipart;
use reelhost_core::{AppError, MediaCategory, MediaFormat};
use std::io::SeekFrom;
use tempfile::NamedTempFile;
use tokio::io::{AsyncSeekExt, AsyncWriteExt};

/// Running byte budget for a single upload field.
#[derive(Debug)]
pub struct SizeBudget {
    max_bytes: usize,
    used: usize,
}

impl SizeBudget {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes, used: 0 }
    }

    /// Account for another chunk. Fails once the running total passes
    /// the cap; bytes already consumed are not rolled back.
    pub fn charge(&mut self, chunk_len: usize) -> Result<(), AppError> {
        self.used += chunk_len;
        if self.used > self.max_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "Upload exceeds maximum allowed size of {} bytes",
                self.max_bytes
            )));
        }
        Ok(())
    }

    pub fn used(&self) -> usize {
        self.used
    }
}

/// A video body staged to local disk, ready for probing and remote
/// upload. The temp file is deleted when this is dropped, whether the
/// request succeeds or fails partway.
#[derive(Debug)]
pub struct StagedVideo {
    pub temp: NamedTempFile,
    pub format: MediaFormat,
    pub size_bytes: usize,
}

impl StagedVideo {
    pub fn path(&self) -> &std::path::Path {
        self.temp.path()
    }

    /// Reopen the staged file for reading, positioned at the start.
    pub async fn open_for_read(&self) -> Result<tokio::fs::File, AppError> {
        let mut file = tokio::fs::File::open(self.temp.path()).await?;
        file.seek(SeekFrom::Start(0)).await?;
        Ok(file)
    }
}

fn multipart_err(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::InvalidInput(format!("Failed to read multipart: {}", e))
}

fn validated_format(
    field_filename: Option<&str>,
    category: MediaCategory,
) -> Result<MediaFormat, AppError> {
    let filename = field_filename
        .ok_or_else(|| AppError::InvalidInput("Upload field has no filename".to_string()))?;
    MediaFormat::from_filename(filename, category)
}

/// Read the named field fully into memory, enforcing `max_bytes` while
/// streaming. Returns the buffered bytes and the validated format
/// derived from the field's filename. Other fields are skipped.
pub async fn read_capped_field(
    mut multipart: Multipart,
    name: &str,
    category: MediaCategory,
    max_bytes: usize,
) -> Result<(Vec<u8>, MediaFormat), AppError> {
    while let Some(mut field) = multipart.next_field().await.map_err(multipart_err)? {
        if field.name() != Some(name) {
            continue;
        }

        let format = validated_format(field.file_name(), category)?;

        let mut budget = SizeBudget::new(max_bytes);
        let mut data = Vec::new();
        while let Some(chunk) = field.chunk().await.map_err(multipart_err)? {
            budget.charge(chunk.len())?;
            data.extend_from_slice(&chunk);
        }

        if data.is_empty() {
            return Err(AppError::InvalidInput("Uploaded file is empty".to_string()));
        }

        return Ok((data, format));
    }

    Err(AppError::InvalidInput(format!(
        "Missing multipart field '{}'",
        name
    )))
}

/// Stream the named field to a temporary file, enforcing `max_bytes`
/// while writing. The file is flushed before returning so callers can
/// hand the path straight to ffprobe or the remote store.
pub async fn stage_video_field(
    multipart: Multipart,
    name: &str,
    max_bytes: usize,
) -> Result<StagedVideo, AppError> {
    stage_video_field_in(multipart, name, max_bytes, &std::env::temp_dir()).await
}

/// Staging with an explicit directory, so tests can observe that no
/// staged file survives a rejected upload.
async fn stage_video_field_in(
    mut multipart: Multipart,
    name: &str,
    max_bytes: usize,
    staging_dir: &std::path::Path,
) -> Result<StagedVideo, AppError> {
    while let Some(mut field) = multipart.next_field().await.map_err(multipart_err)? {
        if field.name() != Some(name) {
            continue;
        }

        let format = validated_format(field.file_name(), MediaCategory::Video)?;

        let temp = NamedTempFile::new_in(staging_dir)
            .map_err(|e| AppError::Internal(format!("Failed to create staging file: {}", e)))?;
        let mut file = tokio::fs::File::create(temp.path()).await?;

        let mut budget = SizeBudget::new(max_bytes);
        while let Some(chunk) = field.chunk().await.map_err(multipart_err)? {
            budget.charge(chunk.len())?;
            file.write_all(&chunk).await?;
        }

        if budget.used() == 0 {
            return Err(AppError::InvalidInput("Uploaded file is empty".to_string()));
        }

        file.flush().await?;
        drop(file);

        return Ok(StagedVideo {
            temp,
            format,
            size_bytes: budget.used(),
        });
    }

    Err(AppError::InvalidInput(format!(
        "Missing multipart field '{}'",
        name
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::Request;

    const BOUNDARY: &str = "upload-test-boundary";

    async fn video_multipart(payload: &[u8]) -> Multipart {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            b"Content-Disposition: form-data; name=\"video\"; filename=\"clip.mp4\"\r\n",
        );
        body.extend_from_slice(b"Content-Type: video/mp4\r\n\r\n");
        body.extend_from_slice(payload);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

        let request = Request::builder()
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap();

        Multipart::from_request(request, &()).await.unwrap()
    }

    fn staged_file_count(dir: &std::path::Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn budget_allows_up_to_cap() {
        let mut budget = SizeBudget::new(10);
        assert!(budget.charge(4).is_ok());
        assert!(budget.charge(6).is_ok());
        assert_eq!(budget.used(), 10);
    }

    #[test]
    fn budget_rejects_first_byte_over_cap() {
        let mut budget = SizeBudget::new(10);
        assert!(budget.charge(10).is_ok());
        let err = budget.charge(1).unwrap_err();
        assert!(matches!(err, AppError::PayloadTooLarge(_)));
    }

    #[test]
    fn budget_rejects_single_oversized_chunk() {
        let mut budget = SizeBudget::new(1024);
        let err = budget.charge(2048).unwrap_err();
        assert!(matches!(err, AppError::PayloadTooLarge(_)));
    }

    #[test]
    fn format_validation_requires_filename() {
        let err = validated_format(None, MediaCategory::Image).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn format_validation_rejects_wrong_category() {
        let err = validated_format(Some("clip.mp4"), MediaCategory::Image).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedMediaType(_)));
    }

    #[tokio::test]
    async fn staged_video_is_readable_and_cleaned_up() {
        let dir = tempfile::tempdir().unwrap();
        let multipart = video_multipart(b"fake video bytes").await;

        let staged = stage_video_field_in(multipart, "video", 1024, dir.path())
            .await
            .unwrap();
        assert_eq!(staged.format.media_type, "video/mp4");
        assert_eq!(staged.size_bytes, 16);
        let path = staged.path().to_path_buf();
        assert!(path.exists());

        let mut file = staged.open_for_read().await.unwrap();
        let mut contents = Vec::new();
        tokio::io::AsyncReadExt::read_to_end(&mut file, &mut contents)
            .await
            .unwrap();
        assert_eq!(contents, b"fake video bytes");

        drop(file);
        drop(staged);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn over_cap_upload_fails_and_leaves_no_staged_file() {
        let dir = tempfile::tempdir().unwrap();
        let multipart = video_multipart(&[0u8; 256]).await;

        let err = stage_video_field_in(multipart, "video", 64, dir.path())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::PayloadTooLarge(_)));
        assert_eq!(staged_file_count(dir.path()), 0);
    }

    #[tokio::test]
    async fn empty_upload_fails_and_leaves_no_staged_file() {
        let dir = tempfile::tempdir().unwrap();
        let multipart = video_multipart(b"").await;

        let err = stage_video_field_in(multipart, "video", 1024, dir.path())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(staged_file_count(dir.path()), 0);
    }

    #[tokio::test]
    async fn missing_video_field_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let multipart = video_multipart(b"bytes").await;

        let err = stage_video_field_in(multipart, "other-field", 1024, dir.path())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(staged_file_count(dir.path()), 0);
    }
}
