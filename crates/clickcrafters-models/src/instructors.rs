//! Public instructor profiles.
//!
//! These are display records for the instructors page and are independent of
//! the `instructor` role stored on [`User`](crate::users::User).

use clickcrafters_core::{InsertResult, MessageResponse};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Instructor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub classes_taken: i32,
    pub bio: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateInstructorDto {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    pub image: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, message = "classes_taken cannot be negative"))]
    pub classes_taken: i32,
    pub bio: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(untagged)]
pub enum CreateInstructorResponse {
    Created(InsertResult),
    AlreadyExists(MessageResponse),
}
