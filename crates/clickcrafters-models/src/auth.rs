//! Token issuance bodies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

/// Body posted to `/jwt`: the signed-in user's email plus any profile fields
/// the client wants carried in the token.
#[derive(Deserialize, Debug, Clone, Validate)]
pub struct TokenRequest {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_request_collects_extra_fields() {
        let dto: TokenRequest =
            serde_json::from_str(r#"{"email":"a@x.com","name":"Ada","uid":"42"}"#).unwrap();
        assert_eq!(dto.email, "a@x.com");
        assert_eq!(dto.extra.len(), 2);
        assert!(dto.validate().is_ok());
    }
}
