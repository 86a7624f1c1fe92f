//! # ClickCrafters Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: Token signing secret and lifetime
//! - [`cors`]: Allowed browser origins
//! - [`database`]: Connection string and pool size
//! - [`payment`]: Payment provider credentials
//! - [`server`]: Listen address
//!
//! Each type exposes a `from_env()` constructor with development defaults.
//! Call `dotenvy::dotenv()` first if values live in a `.env` file.
//!
//! # Example
//!
//! ```ignore
//! use clickcrafters_config::{JwtConfig, PaymentConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let payment_config = PaymentConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod payment;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use payment::PaymentConfig;
pub use server::ServerConfig;

pub(crate) fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
