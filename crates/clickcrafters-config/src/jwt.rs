use std::env;

use crate::env_parse;

const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, token_expiry: i64) -> Self {
        Self {
            secret: secret.into(),
            token_expiry,
        }
    }

    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string()),
            token_expiry: env_parse("JWT_EXPIRY", 3600), // 1 hour
        }
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}
