//! Configuration module
//!
//! Configuration is read once at startup from the environment and injected
//! into each component at construction; nothing reads ambient process state
//! afterwards.

use std::env;

use crate::error::AppError;

const DEFAULT_SERVER_PORT: u16 = 8091;
const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;
const DEFAULT_MAX_THUMBNAIL_SIZE_BYTES: usize = 10 << 20; // 10 MiB
const DEFAULT_MAX_VIDEO_SIZE_BYTES: usize = 1 << 30; // 1 GiB
const DEFAULT_FFPROBE_PATH: &str = "ffprobe";

/// How accepted thumbnails are served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailStorage {
    /// Base64 data URI embedded directly in the record's thumbnail field.
    Inline,
    /// File written under the local asset root and served via a local URL.
    OnDisk,
}

/// Application configuration, immutable after startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub database_url: String,
    // Auth
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    // Remote store
    pub s3_bucket: String,
    pub s3_region: String,
    /// Custom endpoint for S3-compatible providers (MinIO, Spaces, ...).
    pub s3_endpoint: Option<String>,
    // Thumbnail serving
    pub thumbnail_storage: ThumbnailStorage,
    pub assets_root: String,
    pub assets_base_url: String,
    // Probing
    pub ffprobe_path: String,
    // Upload caps
    pub max_thumbnail_size_bytes: usize,
    pub max_video_size_bytes: usize,
}

fn require(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::Internal(format!("{} is not set", name)))
}

fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| AppError::Internal(format!("{} is not a valid value: {}", name, raw))),
        Err(_) => Ok(default),
    }
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `DATABASE_URL`, `JWT_SECRET`, `S3_BUCKET` and `S3_REGION` are
    /// required; everything else falls back to a default.
    pub fn from_env() -> Result<Self, AppError> {
        let thumbnail_storage = match env::var("THUMBNAIL_STORAGE")
            .unwrap_or_else(|_| "inline".to_string())
            .to_lowercase()
            .as_str()
        {
            "inline" => ThumbnailStorage::Inline,
            "disk" => ThumbnailStorage::OnDisk,
            other => {
                return Err(AppError::Internal(format!(
                    "THUMBNAIL_STORAGE must be 'inline' or 'disk', got '{}'",
                    other
                )))
            }
        };

        Ok(Config {
            server_port: parse_or("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            database_url: require("DATABASE_URL")?,
            jwt_secret: require("JWT_SECRET")?,
            jwt_expiry_hours: parse_or("JWT_EXPIRY_HOURS", DEFAULT_JWT_EXPIRY_HOURS)?,
            s3_bucket: require("S3_BUCKET")?,
            s3_region: require("S3_REGION")?,
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            thumbnail_storage,
            assets_root: env::var("ASSETS_ROOT").unwrap_or_else(|_| "./assets".to_string()),
            assets_base_url: env::var("ASSETS_BASE_URL")
                .unwrap_or_else(|_| format!("http://localhost:{}/assets", DEFAULT_SERVER_PORT)),
            ffprobe_path: env::var("FFPROBE_PATH")
                .unwrap_or_else(|_| DEFAULT_FFPROBE_PATH.to_string()),
            max_thumbnail_size_bytes: parse_or(
                "MAX_THUMBNAIL_SIZE_BYTES",
                DEFAULT_MAX_THUMBNAIL_SIZE_BYTES,
            )?,
            max_video_size_bytes: parse_or("MAX_VIDEO_SIZE_BYTES", DEFAULT_MAX_VIDEO_SIZE_BYTES)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_caps_match_contract() {
        assert_eq!(DEFAULT_MAX_THUMBNAIL_SIZE_BYTES, 10 * 1024 * 1024);
        assert_eq!(DEFAULT_MAX_VIDEO_SIZE_BYTES, 1024 * 1024 * 1024);
    }
}
