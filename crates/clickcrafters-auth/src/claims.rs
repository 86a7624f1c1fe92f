//! JWT claim structure for access tokens.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claim names managed by the server; clients cannot override them.
pub const RESERVED_CLAIMS: [&str; 3] = ["email", "exp", "iat"];

/// Decoded access token.
///
/// `extra` holds any additional fields the client supplied when requesting
/// the token (display name, photo URL, ...). They are signed and returned
/// unchanged but never used for authorization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub email: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize_flattens_extra() {
        let mut extra = Map::new();
        extra.insert("name".to_string(), Value::String("Ada".to_string()));

        let claims = Claims {
            email: "ada@example.com".to_string(),
            exp: 1234567890,
            iat: 1234567800,
            extra,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""email":"ada@example.com""#));
        assert!(serialized.contains(r#""name":"Ada""#));
    }

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"email":"user@test.com","exp":9999999999,"iat":9999999900,"photo":"p.png"}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.email, "user@test.com");
        assert_eq!(claims.exp, 9999999999);
        assert_eq!(claims.extra["photo"], "p.png");
    }

    #[test]
    fn test_claims_missing_email_fails() {
        let json = r#"{"exp":9999999999,"iat":9999999900}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }
}
