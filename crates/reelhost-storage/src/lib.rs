//! Reelhost Storage Library
//!
//! Remote object storage (S3) for uploaded video files and the two
//! thumbnail serving strategies (inline data URI, on-disk asset root).
//!
//! # Object keys
//!
//! Remote keys are `<orientation>/<random>.<ext>` where the random part is
//! 32 CSPRNG bytes in URL-safe unpadded base64. Keys are generated once per
//! successful upload and never checked for uniqueness; the entropy makes
//! collisions a non-concern in practice.

pub mod keys;
pub mod s3;
pub mod thumbnail;
pub mod traits;

// Re-export commonly used types
pub use keys::generate_object_key;
pub use s3::S3RemoteStore;
pub use thumbnail::{create_thumbnail_sink, InlineThumbnailSink, OnDiskThumbnailSink, ThumbnailSink};
pub use traits::{RemoteStore, StorageError, StorageResult};
