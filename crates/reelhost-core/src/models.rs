//! Domain models
//!
//! The `Video` record is the unit everything else hangs off: one owner set
//! at creation, nullable thumbnail/video references filled in as uploads
//! succeed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A video metadata record.
///
/// `thumbnail_url` and `video_url` stay `None` until the corresponding
/// upload succeeds. `user_id` is set at creation and never reassigned.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Video {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    /// External URL or embedded data URI, depending on the configured
    /// thumbnail sink.
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
}

/// Creation parameters; title and description are opaque pass-through.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVideoParams {
    pub title: String,
    pub description: String,
}
