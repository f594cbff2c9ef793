//! Video record CRUD handlers.

use crate::auth::AuthUser;
use crate::error::HttpAppError;
use crate::handlers::{ensure_owner, parse_video_id};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use reelhost_core::{models::CreateVideoParams, AppError};
use std::sync::Arc;

pub async fn create_video(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(params): Json<CreateVideoParams>,
) -> Result<impl axum::response::IntoResponse, HttpAppError> {
    if params.title.trim().is_empty() {
        return Err(AppError::InvalidInput("Title must not be empty".to_string()).into());
    }

    let video = state.videos.create(user.user_id, &params).await?;

    Ok((StatusCode::CREATED, Json(video)))
}

/// Fetch a single record. Reads are not gated on ownership.
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
) -> Result<impl axum::response::IntoResponse, HttpAppError> {
    let video_id = parse_video_id(&video_id)?;
    let video = state
        .videos
        .get(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("video {}", video_id)))?;

    Ok(Json(video))
}

/// List the authenticated user's own records.
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl axum::response::IntoResponse, HttpAppError> {
    let videos = state.videos.list_by_user(user.user_id).await?;
    Ok(Json(videos))
}

pub async fn delete_video(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(video_id): Path<String>,
) -> Result<impl axum::response::IntoResponse, HttpAppError> {
    let video_id = parse_video_id(&video_id)?;
    let video = state
        .videos
        .get(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("video {}", video_id)))?;
    ensure_owner(&video, user.user_id)?;

    state.videos.delete(video_id).await?;

    // Remote objects referenced by the deleted record are left in place;
    // cleanup is an offline concern.
    Ok(StatusCode::NO_CONTENT)
}
