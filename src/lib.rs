//! # ClickCrafters API
//!
//! REST backend for an online course marketplace built with Axum and
//! PostgreSQL.
//!
//! Students browse courses, keep a selection of courses they intend to buy,
//! pay for them through a payment provider and see the courses they are
//! enrolled in. Instructors submit classes that an admin approves into live
//! courses. Admins manage users and their roles.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Bearer token and role extractors
//! ├── modules/          # Feature modules
//! │   ├── auth/         # Token issuance
//! │   ├── users/        # Users and roles
//! │   ├── courses/      # Courses, enrollment, enrolled courses
//! │   ├── instructors/  # Instructor profiles
//! │   ├── classes/      # Instructor submissions and approval
//! │   ├── selected_courses/
//! │   ├── payments/     # Payment intents and payment records
//! │   └── health/
//! ├── docs.rs           # OpenAPI document
//! ├── logging.rs        # Subscriber setup and request logging
//! ├── router.rs         # Route table, CORS
//! ├── state.rs          # Shared application state
//! └── validator.rs      # Validated JSON extractor
//! ```
//!
//! Each feature module has a `controller.rs` (handlers), `service.rs`
//! (queries) and `router.rs`. Shared types live in the workspace crates:
//!
//! - `clickcrafters-core`: error type and write results
//! - `clickcrafters-config`: environment configuration
//! - `clickcrafters-db`: connection pool and migrations
//! - `clickcrafters-auth`: token signing and verification
//! - `clickcrafters-models`: entities and DTOs
//! - `clickcrafters-payments`: payment provider bridge
//!
//! ## Roles
//!
//! | Role | Can |
//! |------|-----|
//! | student | Select, pay for and enroll in courses |
//! | instructor | Submit classes and list their submissions |
//! | admin | Manage users, courses, instructors and approve submissions |
//!
//! Roles are stored on the user record and checked on every guarded request.
//!
//! ## API Documentation
//!
//! - Swagger UI: `http://localhost:5000/swagger-ui`
//! - Scalar: `http://localhost:5000/scalar`

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

pub use clickcrafters_auth;
pub use clickcrafters_config;
pub use clickcrafters_core;
pub use clickcrafters_db;
