//! Route configuration and setup

use crate::auth::middleware::AuthState;
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use reelhost_core::{Config, ThumbnailStorage};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

// Slack on top of the configured cap for multipart framing; the exact
// cap is enforced while streaming the field.
const MULTIPART_OVERHEAD_BYTES: usize = 1 << 20;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router {
    let auth_state = Arc::new(AuthState {
        jwt_secret: config.jwt_secret.clone(),
    });

    // Reads are public; everything that mutates goes through the auth
    // middleware.
    let public_routes = Router::new()
        .route("/api/videos/{video_id}", get(handlers::videos::get_video))
        .with_state(state.clone());

    let thumbnail_route = Router::new()
        .route(
            "/api/videos/{video_id}/thumbnail",
            put(handlers::thumbnail_upload::upload_thumbnail),
        )
        .layer(DefaultBodyLimit::max(
            config.max_thumbnail_size_bytes + MULTIPART_OVERHEAD_BYTES,
        ));

    let video_route = Router::new()
        .route(
            "/api/videos/{video_id}/video",
            post(handlers::video_upload::upload_video),
        )
        .layer(DefaultBodyLimit::max(
            config.max_video_size_bytes + MULTIPART_OVERHEAD_BYTES,
        ));

    let protected_routes = Router::new()
        .route("/api/videos", post(handlers::videos::create_video))
        .route("/api/videos", get(handlers::videos::list_videos))
        .route(
            "/api/videos/{video_id}",
            delete(handlers::videos::delete_video),
        )
        .merge(thumbnail_route)
        .merge(video_route)
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            crate::auth::middleware::auth_middleware,
        ))
        .with_state(state.clone());

    let mut app = public_routes.merge(protected_routes);

    if config.thumbnail_storage == ThumbnailStorage::OnDisk {
        app = app.nest_service("/assets", ServeDir::new(&config.assets_root));
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    app.layer(cors).layer(TraceLayer::new_for_http())
}
