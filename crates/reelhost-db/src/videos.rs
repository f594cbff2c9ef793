//! Video record repository.

use reelhost_core::models::{CreateVideoParams, Video};
use reelhost_core::AppError;
use sqlx::PgPool;
use uuid::Uuid;

/// Repository for video metadata records.
///
/// Reference-field updates are plain read-modify-write: there is no
/// compare-and-swap, so two concurrent uploads to the same record race and
/// the last successful write wins.
#[derive(Clone)]
pub struct VideoRepository {
    pool: PgPool,
}

impl VideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a record owned by `user_id`. The owner is set here and never
    /// reassigned.
    pub async fn create(
        &self,
        user_id: Uuid,
        params: &CreateVideoParams,
    ) -> Result<Video, AppError> {
        let video = sqlx::query_as::<_, Video>(
            r#"
            INSERT INTO videos (user_id, title, description)
            VALUES ($1, $2, $3)
            RETURNING id, created_at, updated_at, user_id, title, description,
                      thumbnail_url, video_url
            "#,
        )
        .bind(user_id)
        .bind(&params.title)
        .bind(&params.description)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(video_id = %video.id, user_id = %user_id, "Video record created");

        Ok(video)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        let video = sqlx::query_as::<_, Video>(
            r#"
            SELECT id, created_at, updated_at, user_id, title, description,
                   thumbnail_url, video_url
            FROM videos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(video)
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Video>, AppError> {
        let videos = sqlx::query_as::<_, Video>(
            r#"
            SELECT id, created_at, updated_at, user_id, title, description,
                   thumbnail_url, video_url
            FROM videos
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(videos)
    }

    /// Persist the record's mutable fields (title, description, reference
    /// URLs). Owner and timestamps-of-creation are never touched.
    pub async fn update(&self, video: &Video) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE videos
            SET title = $2,
                description = $3,
                thumbnail_url = $4,
                video_url = $5,
                updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(video.id)
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.thumbnail_url)
        .bind(&video.video_url)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("video {}", video.id)));
        }

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("video {}", id)));
        }

        tracing::info!(video_id = %id, "Video record deleted");

        Ok(())
    }
}
