//! # ClickCrafters CLI
//!
//! Administration and seeding utilities used by the `clickcrafters-cli`
//! binary.
//!
//! Admins cannot be created through the API (every new user is a student),
//! so the first admin is promoted here.
//!
//! ## Usage
//!
//! ```ignore
//! use clickcrafters_cli::admin::promote_to_admin;
//! use clickcrafters_cli::seeder::{SeedConfig, seed_all};
//!
//! promote_to_admin(&pool, "ada@example.com", "Ada").await?;
//! seed_all(&pool, SeedConfig::default()).await?;
//! ```

pub mod admin;
pub mod seeder;
