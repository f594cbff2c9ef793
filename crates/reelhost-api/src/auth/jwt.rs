//! JWT validation against the configured signing secret (HS256).

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use reelhost_core::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID as UUID string).
    pub sub: String,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
    /// Issued at (Unix timestamp).
    pub iat: i64,
}

/// Issue a token for `user_id`, signed with the shared secret.
pub fn create_token(
    user_id: Uuid,
    secret: &str,
    expiry_hours: i64,
) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        exp: (now + Duration::hours(expiry_hours)).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
}

/// Validate a bearer token and resolve the user identity.
///
/// Signature and expiry failures both surface as `Unauthorized`; the
/// specific cause is kept in the message for logs, not leaked as a
/// different status.
pub fn validate_token(token: &str, secret: &str) -> Result<Uuid, AppError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|e| AppError::Unauthorized(format!("Couldn't validate token: {}", e)))?;

    Uuid::parse_str(&data.claims.sub)
        .map_err(|_| AppError::Unauthorized("Token subject is not a valid user ID".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-signing-secret";

    #[test]
    fn round_trips_user_identity() {
        let user_id = Uuid::new_v4();
        let token = create_token(user_id, SECRET, 1).unwrap();
        assert_eq!(validate_token(&token, SECRET).unwrap(), user_id);
    }

    #[test]
    fn rejects_wrong_secret() {
        let token = create_token(Uuid::new_v4(), SECRET, 1).unwrap();
        let err = validate_token(&token, "another-secret").unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn rejects_expired_token() {
        let token = create_token(Uuid::new_v4(), SECRET, -1).unwrap();
        let err = validate_token(&token, SECRET).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn rejects_garbage_token() {
        let err = validate_token("not.a.jwt", SECRET).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
