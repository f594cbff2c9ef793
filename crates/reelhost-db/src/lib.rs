//! Reelhost DB Library
//!
//! Postgres persistence for video metadata records.

pub mod videos;

pub use videos::VideoRepository;

use reelhost_core::AppError;
use sqlx::PgPool;

/// Apply pending migrations from the embedded `migrations/` directory.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| AppError::Internal(format!("Migration failed: {}", e)))?;

    tracing::info!("Database migrations applied");

    Ok(())
}
