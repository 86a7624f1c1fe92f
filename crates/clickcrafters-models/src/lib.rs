//! # ClickCrafters Models
//!
//! Database entities, request DTOs and response bodies for the ClickCrafters
//! API.
//!
//! # Modules
//!
//! - [`auth`]: Token issuance bodies
//! - [`classes`]: Instructor course submissions awaiting approval
//! - [`courses`]: Live courses
//! - [`instructors`]: Public instructor profiles
//! - [`payments`]: Payment intents and payment records
//! - [`selected_courses`]: Per-user cart entries
//! - [`users`]: Users and their role
//!
//! # Example
//!
//! ```ignore
//! use clickcrafters_models::users::{User, UserRole};
//!
//! let role: UserRole = "instructor".parse()?;
//! assert_eq!(role.as_str(), "instructor");
//! ```

pub mod auth;
pub mod classes;
pub mod courses;
pub mod instructors;
pub mod payments;
pub mod selected_courses;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{TokenRequest, TokenResponse};
pub use classes::{ApprovalResponse, ClassStatus, CreatePendingClassDto, PendingClass};
pub use courses::{Course, CreateCourseDto};
pub use instructors::{CreateInstructorDto, CreateInstructorResponse, Instructor};
pub use payments::{
    CreatePaymentDto, Payment, PaymentIntentRequestDto, PaymentIntentResponse,
    RecordPaymentResponse,
};
pub use selected_courses::{CreateSelectedCourseDto, EmailQuery, SelectedCourse};
pub use users::{
    AdminStatusResponse, CreateUserDto, CreateUserResponse, InstructorStatusResponse,
    RoleResponse, User, UserRole,
};
