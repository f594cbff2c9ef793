use crate::auth::jwt::validate_token;
use crate::auth::models::AuthUser;
use crate::error::HttpAppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use reelhost_core::AppError;
use std::sync::Arc;

/// State for the authentication middleware: the shared signing secret.
#[derive(Clone)]
pub struct AuthState {
    pub jwt_secret: String,
}

/// Resolve the bearer credential to a user identity before any handler
/// runs. This sits in front of every mutating route, so authorization
/// failures never consume upload bytes or touch the filesystem.
pub async fn auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = match request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
    {
        Some(h) => h,
        None => {
            return HttpAppError(AppError::Unauthorized(
                "Missing authorization header".to_string(),
            ))
            .into_response();
        }
    };

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        return HttpAppError(AppError::Unauthorized(
            "Invalid authorization header format".to_string(),
        ))
        .into_response();
    };

    let user_id = match validate_token(token, &auth_state.jwt_secret) {
        Ok(user_id) => user_id,
        Err(e) => return HttpAppError(e).into_response(),
    };

    request.extensions_mut().insert(AuthUser { user_id });
    next.run(request).await
}
