use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use clickcrafters_auth::{Claims, verify_token};
use clickcrafters_core::AppError;

use crate::state::AppState;

/// Extractor that validates the bearer token and provides its claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn email(&self) -> &str {
        &self.0.email
    }

    /// Fails with 403 unless `email` is the caller's own address.
    pub fn ensure_email(&self, email: &str) -> Result<(), AppError> {
        if self.email() != email {
            return Err(AppError::forbidden());
        }
        Ok(())
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::unauthorized())?;

        let claims = verify_token(bearer.token(), &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn auth_user(email: &str) -> AuthUser {
        AuthUser(Claims {
            email: email.to_string(),
            exp: 9999999999,
            iat: 1234567890,
            extra: Map::new(),
        })
    }

    #[test]
    fn test_ensure_email_matches() {
        let user = auth_user("a@x.com");
        assert!(user.ensure_email("a@x.com").is_ok());
    }

    #[test]
    fn test_ensure_email_mismatch_is_forbidden() {
        let user = auth_user("a@x.com");
        let err = user.ensure_email("b@x.com").unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::FORBIDDEN);
    }
}
