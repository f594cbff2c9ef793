//! Video upload handler.
//!
//! Accepts a multipart `video` field, stages it to a temporary file,
//! probes its dimensions with ffprobe, classifies the aspect ratio, and
//! uploads it to the remote store under an orientation-prefixed random
//! key. The staged file is removed on every exit path via the temp file
//! guard.

use crate::auth::AuthUser;
use crate::error::HttpAppError;
use crate::handlers::{ensure_owner, parse_video_id};
use crate::services::upload::stage_video_field;
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use reelhost_core::AppError;
use reelhost_probe::classify_aspect;
use reelhost_storage::generate_object_key;
use std::sync::Arc;
use std::time::Instant;

pub async fn upload_video(
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

    let start = Instant::now();
    let staged = stage_video_field(multipart, "video", state.config.max_video_size_bytes).await?;

    let report = state.prober.probe(staged.path()).await?;
    let aspect = classify_aspect(report.width, report.height);

    let key = format!(
        "{}/{}.{}",
        aspect.key_prefix(),
        generate_object_key(),
        staged.format.extension
    );

    let file = staged.open_for_read().await?;
    let url = state
        .store
        .put_file(&key, &staged.format.media_type, file)
        .await?;

    tracing::info!(
        video_id = %video_id,
        key = %key,
        aspect = %aspect,
        width = report.width,
        height = report.height,
        size_bytes = staged.size_bytes,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Video uploaded to remote store"
    );

    // If the record write fails here the remote object is orphaned; there
    // is no rollback of the store upload.
    video.video_url = Some(url);
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
