//! Reelhost API
//!
//! The axum application: authentication middleware, upload ingestion, and
//! the HTTP handlers around the video record store.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
