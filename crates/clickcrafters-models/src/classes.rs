//! Instructor course submissions.
//!
//! An instructor submits a class; it stays [`ClassStatus::Pending`] until an
//! admin approves it, at which point a [`Course`](crate::courses::Course) is
//! created from it and the submission remembers the new course id.

use clickcrafters_core::{InsertResult, UpdateResult};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "class_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ClassStatus {
    #[default]
    Pending,
    Approve,
}

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct PendingClass {
    pub id: Uuid,
    pub name: String,
    pub image: Option<String>,
    pub instructor_name: String,
    pub instructor_email: String,
    pub price: f64,
    pub available_seat: i32,
    pub status: ClassStatus,
    /// Set once the submission is approved.
    pub course_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Body for a new submission. The instructor email comes from the token.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreatePendingClassDto {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub image: Option<String>,
    #[validate(length(min = 1, message = "instructor_name is required"))]
    pub instructor_name: String,
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub price: f64,
    #[validate(range(min = 0, message = "available_seat cannot be negative"))]
    pub available_seat: i32,
}

/// Outcome of approving a submission.
///
/// `course` is `None` when nothing was inserted: the submission was missing
/// or had already been approved.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct ApprovalResponse {
    pub course: Option<InsertResult>,
    pub submission: UpdateResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(ClassStatus::Approve).unwrap(),
            serde_json::json!("approve")
        );
        assert_eq!(ClassStatus::default(), ClassStatus::Pending);
    }
}
