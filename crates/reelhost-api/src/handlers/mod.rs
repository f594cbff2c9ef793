pub mod thumbnail_upload;
pub mod video_upload;
pub mod videos;

use reelhost_core::{models::Video, AppError};
use uuid::Uuid;

/// Reject with `Forbidden` unless `user_id` owns the record. Every
/// mutating route checks ownership before touching the request body.
pub fn ensure_owner(video: &Video, user_id: Uuid) -> Result<(), AppError> {
    if video.user_id != user_id {
        return Err(AppError::Forbidden(
            "You do not own this video".to_string(),
        ));
    }
    Ok(())
}

/// Parse a path segment as a video ID.
pub fn parse_video_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::InvalidInput(format!("Invalid video ID: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_video(user_id: Uuid) -> Video {
        Video {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            user_id,
            title: "title".to_string(),
            description: "description".to_string(),
            thumbnail_url: None,
            video_url: None,
        }
    }

    #[test]
    fn owner_passes_ownership_check() {
        let user_id = Uuid::new_v4();
        assert!(ensure_owner(&sample_video(user_id), user_id).is_ok());
    }

    #[test]
    fn non_owner_is_forbidden() {
        let err = ensure_owner(&sample_video(Uuid::new_v4()), Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        assert_eq!(reelhost_core::ErrorMetadata::http_status_code(&err), 403);
    }

    #[test]
    fn malformed_video_id_is_invalid_input() {
        let err = parse_video_id("not-a-uuid").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
