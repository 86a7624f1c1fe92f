//! Cart entries: courses a user has selected but not necessarily paid for.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// A selected course with a snapshot of the course details shown in the cart.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct SelectedCourse {
    pub id: Uuid,
    pub email: String,
    pub course_id: Uuid,
    pub name: String,
    pub image: Option<String>,
    pub instructor_name: String,
    pub price: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateSelectedCourseDto {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    pub course_id: Uuid,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub image: Option<String>,
    #[serde(default)]
    pub instructor_name: String,
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub price: f64,
}

/// `?email=` filter used by the per-user listing endpoints.
#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    /// The requested email, treating an empty value as absent.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }
}
