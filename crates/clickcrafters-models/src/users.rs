//! User domain models and DTOs.
//!
//! A user record is created the first time someone signs in on the client.
//! Everyone starts as a [`UserRole::Student`]; only an admin can promote a
//! user to admin or instructor.

use clickcrafters_core::{InsertResult, MessageResponse};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Stored role of a user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Admin,
    Instructor,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Admin => "admin",
            UserRole::Instructor => "instructor",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(UserRole::Student),
            "admin" => Ok(UserRole::Admin),
            "instructor" => Ok(UserRole::Instructor),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub photo_url: Option<String>,
    pub role: UserRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Body posted by the client after sign-in.
///
/// The role is not accepted from the client: new users are always students.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub photo_url: Option<String>,
}

/// Either the insert result or the "already exists" notice.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(untagged)]
pub enum CreateUserResponse {
    Created(InsertResult),
    AlreadyExists(MessageResponse),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct AdminStatusResponse {
    pub admin: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct InstructorStatusResponse {
    pub instructor: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct RoleResponse {
    pub role: Option<UserRole>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip_through_str() {
        for role in [UserRole::Student, UserRole::Admin, UserRole::Instructor] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
        assert!("moderator".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_default_role_is_student() {
        assert_eq!(UserRole::default(), UserRole::Student);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_value(RoleResponse {
            role: Some(UserRole::Instructor),
        })
        .unwrap();
        assert_eq!(json["role"], "instructor");
    }

    #[test]
    fn test_create_user_response_is_untagged() {
        let json = serde_json::to_value(CreateUserResponse::AlreadyExists(MessageResponse::new(
            "User is already exist",
        )))
        .unwrap();
        assert_eq!(json, serde_json::json!({ "message": "User is already exist" }));
    }

    #[test]
    fn test_create_user_dto_validation() {
        let dto = CreateUserDto {
            email: "not-an-email".to_string(),
            name: "Ada".to_string(),
            photo_url: None,
        };
        assert!(dto.validate().is_err());

        let dto: CreateUserDto = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.name, "");
    }
}
