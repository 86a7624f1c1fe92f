use axum::{
    Json,
    extract::{Path, Query, State},
};
use clickcrafters_core::{AppError, DeleteResult, ErrorResponse, InsertResult};
use clickcrafters_models::selected_courses::{
    CreateSelectedCourseDto, EmailQuery, SelectedCourse,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::selected_courses::service::SelectedCourseService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List the caller's selected courses
///
/// Without an `email` query parameter the list is empty.
#[utoipa::path(
    get,
    path = "/selected-courses",
    params(EmailQuery),
    responses(
        (status = 200, description = "Selected courses for the email", body = Vec<SelectedCourse>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email is not the caller's", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Selected Courses"
)]
#[instrument(skip(state))]
pub async fn get_selected_courses(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<SelectedCourse>>, AppError> {
    let Some(email) = query.email() else {
        return Ok(Json(Vec::new()));
    };
    auth_user.ensure_email(email)?;

    let entries = SelectedCourseService::get_selected_courses(&state.db, email).await?;
    Ok(Json(entries))
}

/// Add a course to the caller's selection
#[utoipa::path(
    post,
    path = "/selected-courses",
    request_body = CreateSelectedCourseDto,
    responses(
        (status = 200, description = "Insert result", body = InsertResult),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email is not the caller's", body = ErrorResponse),
        (status = 422, description = "Validation error or unknown course", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Selected Courses"
)]
#[instrument(skip(state))]
pub async fn select_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateSelectedCourseDto>,
) -> Result<Json<InsertResult>, AppError> {
    auth_user.ensure_email(&dto.email)?;

    let result = SelectedCourseService::select_course(&state.db, dto).await?;
    Ok(Json(result))
}

/// Remove one of the caller's selected courses
#[utoipa::path(
    delete,
    path = "/selected-courses/{id}",
    params(("id" = Uuid, Path, description = "Selected course ID")),
    responses(
        (status = 200, description = "Delete result; zero when the entry is not the caller's", body = DeleteResult),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Selected Courses"
)]
#[instrument(skip(state))]
pub async fn remove_selected_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResult>, AppError> {
    let result =
        SelectedCourseService::remove_selected_course(&state.db, id, auth_user.email()).await?;
    Ok(Json(result))
}
