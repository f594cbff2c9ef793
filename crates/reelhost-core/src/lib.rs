//! Reelhost Core Library
//!
//! This crate provides the domain models, error types, configuration, and
//! media format validation shared across all Reelhost components.

pub mod config;
pub mod error;
pub mod media_format;
pub mod models;

// Re-export commonly used types
pub use config::{Config, ThumbnailStorage};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use media_format::{MediaCategory, MediaFormat};
