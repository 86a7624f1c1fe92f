//! Course models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A live course students can select and pay for.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub image: Option<String>,
    pub instructor_name: String,
    pub instructor_email: String,
    /// Price in major currency units.
    pub price: f64,
    pub available_seat: i32,
    pub students: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Body for creating a course directly (admin only).
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub image: Option<String>,
    #[validate(length(min = 1, message = "instructor_name is required"))]
    pub instructor_name: String,
    #[validate(email(message = "instructor_email must be a valid email address"))]
    pub instructor_email: String,
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub price: f64,
    #[validate(range(min = 0, message = "available_seat cannot be negative"))]
    pub available_seat: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> CreateCourseDto {
        CreateCourseDto {
            name: "Watercolor Basics".to_string(),
            image: None,
            instructor_name: "Ada".to_string(),
            instructor_email: "ada@example.com".to_string(),
            price: 49.99,
            available_seat: 20,
        }
    }

    #[test]
    fn test_valid_course() {
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn test_negative_values_rejected() {
        let mut bad = dto();
        bad.price = -1.0;
        assert!(bad.validate().is_err());

        let mut bad = dto();
        bad.available_seat = -3;
        assert!(bad.validate().is_err());
    }
}
