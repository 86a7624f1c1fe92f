//! Role-based authorization.
//!
//! Roles are not embedded in the token: each guarded request looks up the
//! caller's stored role, so promotions take effect immediately.

use axum::{extract::FromRequestParts, http::request::Parts};
use clickcrafters_core::AppError;
use clickcrafters_models::users::UserRole;

use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;

/// Fails with 403 unless the stored role equals `required`.
///
/// A missing user (`None`) never satisfies a role requirement.
pub fn check_role(stored: Option<UserRole>, required: UserRole) -> Result<(), AppError> {
    match stored {
        Some(role) if role == required => Ok(()),
        _ => Err(AppError::forbidden()),
    }
}

macro_rules! require_role {
    ($name:ident, $role:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub AuthUser);

        impl FromRequestParts<AppState> for $name {
            type Rejection = AppError;

            async fn from_request_parts(
                parts: &mut Parts,
                state: &AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user = AuthUser::from_request_parts(parts, state).await?;
                let stored = UserService::find_role_by_email(&state.db, auth_user.email()).await?;

                if let Err(err) = check_role(stored, $role) {
                    tracing::warn!(
                        user.email = %auth_user.email(),
                        user.role = ?stored,
                        required = %$role,
                        "Role check failed"
                    );
                    return Err(err);
                }

                Ok($name(auth_user))
            }
        }
    };
}

require_role!(AdminUser, UserRole::Admin);
require_role!(InstructorUser, UserRole::Instructor);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_check_role_exact_match() {
        assert!(check_role(Some(UserRole::Admin), UserRole::Admin).is_ok());
        assert!(check_role(Some(UserRole::Instructor), UserRole::Instructor).is_ok());
    }

    #[test]
    fn test_check_role_mismatch_is_forbidden() {
        for stored in [UserRole::Student, UserRole::Instructor] {
            let err = check_role(Some(stored), UserRole::Admin).unwrap_err();
            assert_eq!(err.status, StatusCode::FORBIDDEN);
        }
        assert!(check_role(Some(UserRole::Admin), UserRole::Instructor).is_err());
    }

    #[test]
    fn test_check_role_missing_user_is_forbidden() {
        let err = check_role(None, UserRole::Admin).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }
}
