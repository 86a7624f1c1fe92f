//! Token creation and verification.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde_json::{Map, Value};

use clickcrafters_config::JwtConfig;
use clickcrafters_core::AppError;

use crate::claims::{Claims, RESERVED_CLAIMS};

/// Signs a token for `email`, carrying `extra` fields in the payload.
///
/// Reserved claim names in `extra` are dropped so the server-set values win.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn create_token(
    email: &str,
    mut extra: Map<String, Value>,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    for key in RESERVED_CLAIMS {
        extra.remove(key);
    }

    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        email: email.to_string(),
        exp: now + jwt_config.token_expiry.max(0) as usize,
        iat: now,
        extra,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies signature and expiry, returning the decoded claims.
///
/// # Errors
///
/// Returns an unauthorized error if the token is malformed, signed with a
/// different secret, or expired.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig::new("test-secret-key-for-testing", 3600)
    }

    #[test]
    fn test_create_and_verify_token() {
        let config = get_test_jwt_config();
        let token = create_token("student@example.com", Map::new(), &config).unwrap();

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.email, "student@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let config = get_test_jwt_config();
        let mut extra = Map::new();
        extra.insert("name".to_string(), Value::String("Grace".to_string()));

        let token = create_token("grace@example.com", extra, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.extra["name"], "Grace");
    }

    #[test]
    fn test_reserved_claims_cannot_be_overridden() {
        let config = get_test_jwt_config();
        let mut extra = Map::new();
        extra.insert("exp".to_string(), Value::from(9_999_999_999u64));
        extra.insert("email".to_string(), Value::String("admin@example.com".to_string()));

        let token = create_token("student@example.com", extra, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.email, "student@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(claims.extra.is_empty());
    }

    #[test]
    fn test_verify_invalid_token() {
        let config = get_test_jwt_config();
        let err = verify_token("not-a-jwt", &config).unwrap_err();
        assert_eq!(err.status.as_u16(), 401);
    }

    #[test]
    fn test_verify_wrong_secret() {
        let token = create_token("a@x.com", Map::new(), &get_test_jwt_config()).unwrap();
        let other = JwtConfig::new("another-secret", 3600);
        assert!(verify_token(&token, &other).is_err());
    }

    #[test]
    fn test_verify_expired_token() {
        let config = get_test_jwt_config();
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            email: "late@example.com".to_string(),
            exp: now - 3600,
            iat: now - 7200,
            extra: Map::new(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(verify_token(&token, &config).is_err());
    }
}
