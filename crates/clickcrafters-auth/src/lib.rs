//! # ClickCrafters Auth
//!
//! Bearer token support for the ClickCrafters API.
//!
//! - [`claims`]: The decoded token payload
//! - [`jwt`]: Token signing and verification
//!
//! Tokens are HS256 JWTs signed with the shared `JWT_SECRET`. The payload is
//! whatever object the client posted to `/jwt`; only `email` is required and
//! it is the identity every guard relies on.
//!
//! # Example
//!
//! ```ignore
//! use clickcrafters_auth::{create_token, verify_token};
//! use clickcrafters_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_token("student@example.com", Default::default(), &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.email, "student@example.com");
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_token, verify_token};
