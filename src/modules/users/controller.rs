use axum::{
    Json,
    extract::{Path, State},
};
use clickcrafters_core::{AppError, DeleteResult, ErrorResponse, UpdateResult};
use clickcrafters_models::users::{
    AdminStatusResponse, CreateUserDto, CreateUserResponse, RoleResponse, User, UserRole,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::AdminUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Get all users (admin only)
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::get_users(&state.db).await?;
    Ok(Json(users))
}

/// Register a user after their first sign-in
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "Insert result, or a message if the email is already registered", body = CreateUserResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<Json<CreateUserResponse>, AppError> {
    let response = UserService::create_user(&state.db, dto).await?;
    Ok(Json(response))
}

/// Check whether the caller is an admin
///
/// Answers `false` without a lookup when `email` is not the caller's own.
#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    params(("email" = String, Path, description = "Email to check")),
    responses(
        (status = 200, description = "Admin flag", body = AdminStatusResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn check_admin(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<AdminStatusResponse>, AppError> {
    if auth_user.email() != email {
        return Ok(Json(AdminStatusResponse { admin: false }));
    }

    let role = UserService::find_role_by_email(&state.db, &email).await?;
    Ok(Json(AdminStatusResponse {
        admin: role == Some(UserRole::Admin),
    }))
}

/// Get the caller's stored role
#[utoipa::path(
    get,
    path = "/users/role/{email}",
    params(("email" = String, Path, description = "Caller's email")),
    responses(
        (status = 200, description = "Stored role, or null for unknown users", body = RoleResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email is not the caller's", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_role(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<RoleResponse>, AppError> {
    auth_user.ensure_email(&email)?;

    let role = UserService::find_role_by_email(&state.db, &email).await?;
    Ok(Json(RoleResponse { role }))
}

/// Promote a user to admin
#[utoipa::path(
    patch,
    path = "/users/admin/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Update result", body = UpdateResult),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn make_admin(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = UserService::set_role(&state.db, id, UserRole::Admin).await?;
    Ok(Json(result))
}

/// Promote a user to instructor
#[utoipa::path(
    patch,
    path = "/users/instructor/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Update result", body = UpdateResult),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn make_instructor(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = UserService::set_role(&state.db, id, UserRole::Instructor).await?;
    Ok(Json(result))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/delete/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Delete result (zero count if absent)", body = DeleteResult),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = UserService::delete_user(&state.db, id).await?;
    Ok(Json(result))
}
