//! Application setup and initialization
//!
//! Wiring extracted from main.rs: database pool, storage clients, route
//! table, and server startup.

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use reelhost_core::Config;
use reelhost_db::VideoRepository;
use reelhost_probe::FfprobeProber;
use reelhost_storage::{create_thumbnail_sink, S3RemoteStore};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

/// Build the shared state and the router from configuration.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    reelhost_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let store = S3RemoteStore::new(
        config.s3_bucket.clone(),
        config.s3_region.clone(),
        config.s3_endpoint.clone(),
    )
    .await
    .context("Failed to initialize remote store")?;

    let thumbnails = create_thumbnail_sink(&config)
        .await
        .context("Failed to set up thumbnail sink")?;

    let config = Arc::new(config);
    let state = Arc::new(AppState {
        config: config.clone(),
        videos: VideoRepository::new(pool),
        store: Arc::new(store),
        thumbnails,
        prober: Arc::new(FfprobeProber::new(config.ffprobe_path.clone())),
    });

    let router = routes::setup_routes(&config, state.clone());

    Ok((state, router))
}
