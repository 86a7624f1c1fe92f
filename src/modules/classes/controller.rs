use axum::{
    Json,
    extract::{Path, Query, State},
};
use clickcrafters_core::{AppError, DeleteResult, ErrorResponse, InsertResult};
use clickcrafters_models::classes::{ApprovalResponse, CreatePendingClassDto, PendingClass};
use clickcrafters_models::selected_courses::EmailQuery;
use clickcrafters_models::users::{InstructorStatusResponse, UserRole};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::{AdminUser, InstructorUser};
use crate::modules::classes::service::ClassService;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List the calling instructor's submissions
#[utoipa::path(
    get,
    path = "/my-classes",
    params(EmailQuery),
    responses(
        (status = 200, description = "Submissions by this instructor", body = Vec<PendingClass>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not an instructor, or email is not the caller's", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_my_classes(
    State(state): State<AppState>,
    InstructorUser(instructor): InstructorUser,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<PendingClass>>, AppError> {
    let email = query.email().unwrap_or(instructor.email());
    instructor.ensure_email(email)?;

    let classes = ClassService::get_classes_by_instructor(&state.db, email).await?;
    Ok(Json(classes))
}

/// Submit a class for admin review
#[utoipa::path(
    post,
    path = "/my-classes",
    request_body = CreatePendingClassDto,
    responses(
        (status = 200, description = "Submission stored as pending", body = InsertResult),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an instructor", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn submit_class(
    State(state): State<AppState>,
    InstructorUser(instructor): InstructorUser,
    ValidatedJson(dto): ValidatedJson<CreatePendingClassDto>,
) -> Result<Json<InsertResult>, AppError> {
    let result = ClassService::submit_class(&state.db, instructor.email(), dto).await?;
    Ok(Json(result))
}

/// Check whether the caller holds the instructor role
#[utoipa::path(
    get,
    path = "/my-classes/instructor/{email}",
    params(("email" = String, Path, description = "Caller's email")),
    responses(
        (status = 200, description = "Instructor flag; false for any other email", body = InstructorStatusResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn check_instructor(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<InstructorStatusResponse>, AppError> {
    if auth_user.email() != email {
        return Ok(Json(InstructorStatusResponse { instructor: false }));
    }

    let role = UserService::find_role_by_email(&state.db, &email).await?;
    Ok(Json(InstructorStatusResponse {
        instructor: role == Some(UserRole::Instructor),
    }))
}

/// List every submission (admin only)
#[utoipa::path(
    get,
    path = "/pending-classes",
    responses(
        (status = 200, description = "All submissions", body = Vec<PendingClass>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_pending_classes(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<PendingClass>>, AppError> {
    let classes = ClassService::get_pending_classes(&state.db).await?;
    Ok(Json(classes))
}

/// Approve a submission and publish it as a course (admin only)
#[utoipa::path(
    patch,
    path = "/pending-classes/approve/{id}",
    params(("id" = Uuid, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "New course and submission update; zero counts if absent or already approved", body = ApprovalResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn approve_class(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApprovalResponse>, AppError> {
    let response = ClassService::approve_class(&state.db, id).await?;
    Ok(Json(response))
}

/// Delete a submission (admin only)
#[utoipa::path(
    delete,
    path = "/pending-classes/{id}",
    params(("id" = Uuid, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Delete result", body = DeleteResult),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn delete_class(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = ClassService::delete_class(&state.db, id).await?;
    Ok(Json(result))
}
