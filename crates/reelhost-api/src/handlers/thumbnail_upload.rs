//! Thumbnail upload handler.
//!
//! Accepts a multipart `thumbnail` field, validates the image format by
//! filename extension, stores the bytes through the configured sink
//! (inline data URI or on-disk asset), and persists the resulting URL on
//! the record.

use crate::auth::AuthUser;
use crate::error::HttpAppError;
use crate::handlers::{ensure_owner, parse_video_id};
use crate::services::upload::read_capped_field;
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use reelhost_core::{AppError, MediaCategory};
use std::sync::Arc;

pub async fn upload_thumbnail(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(video_id): Path<String>,
    multipart: Multipart,
) -> Result<impl axum::response::IntoResponse, HttpAppError> {
    let video_id = parse_video_id(&video_id)?;

    // Ownership is checked before any body bytes are consumed.
    let mut video = state
        .videos
        .get(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("video {}", video_id)))?;
    ensure_owner(&video, user.user_id)?;

    let (data, format) = read_capped_field(
        multipart,
        "thumbnail",
        MediaCategory::Image,
        state.config.max_thumbnail_size_bytes,
    )
    .await?;

    tracing::info!(
        video_id = %video_id,
        media_type = %format.media_type,
        size_bytes = data.len(),
        "Storing thumbnail"
    );

    let url = state.thumbnails.store(video_id, &format, data).await?;

    video.thumbnail_url = Some(url);
    state.videos.update(&video).await?;

    // Re-fetch so the response reflects what was actually persisted,
    // including any concurrent writes that landed after ours.
    let video = state
        .videos
        .get(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("video {}", video_id)))?;

    Ok(Json(video))
}
