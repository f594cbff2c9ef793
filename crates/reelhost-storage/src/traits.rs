//! Storage abstraction traits
//!
//! `RemoteStore` is the seam between upload handlers and the object store,
//! so tests can substitute a fake without an S3 endpoint.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store could not be reached at all (connect/timeout failure).
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store answered and refused the request.
    #[error("Store rejected request: {0}")]
    Rejected(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Remote object store abstraction.
///
/// Given a key, a byte source, and a content type, upload the bytes and
/// report the externally addressable URL. The URL is composed
/// deterministically from the store's addressing convention - no read-back
/// is performed to discover it.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Upload a staged local file under `key`. The file is read from its
    /// current position, so callers must rewind after staging.
    async fn put_file(
        &self,
        key: &str,
        content_type: &str,
        file: tokio::fs::File,
    ) -> StorageResult<String>;

    /// The externally addressable URL for `key`.
    fn object_url(&self, key: &str) -> String;
}
