//! Request guards.
//!
//! - [`auth`]: Bearer token extractor ([`auth::AuthUser`])
//! - [`role`]: Stored-role extractors ([`role::AdminUser`], [`role::InstructorUser`])
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. `AuthUser` verifies the token and exposes the claimed email
//! 3. Role extractors look the email up in `users` and compare the stored role
//! 4. Handler executes if all checks pass
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::role::AdminUser;
//!
//! async fn list_users(State(state): State<AppState>, _admin: AdminUser) -> ... {
//!     // Only runs for callers whose stored role is `admin`
//! }
//! ```

pub mod auth;
pub mod role;
