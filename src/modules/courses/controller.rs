use axum::{
    Json,
    extract::{Path, Query, State},
};
use clickcrafters_core::{AppError, DeleteResult, ErrorResponse, InsertResult, UpdateResult};
use clickcrafters_models::courses::{Course, CreateCourseDto};
use clickcrafters_models::selected_courses::EmailQuery;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::AdminUser;
use crate::modules::courses::service::CourseService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List every course
#[utoipa::path(
    get,
    path = "/courses",
    responses((status = 200, description = "All courses", body = Vec<Course>)),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    let courses = CourseService::get_courses(&state.db).await?;
    Ok(Json(courses))
}

/// List the most-enrolled courses
#[utoipa::path(
    get,
    path = "/courses/popular",
    responses((status = 200, description = "Top courses by student count", body = Vec<Course>)),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_popular_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = CourseService::get_popular_courses(&state.db).await?;
    Ok(Json(courses))
}

/// Get one course
#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    responses((status = 200, description = "The course, or null if absent", body = Course)),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<Course>>, AppError> {
    let course = CourseService::get_course(&state.db, id).await?;
    Ok(Json(course))
}

/// Create a course directly (admin only)
#[utoipa::path(
    post,
    path = "/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 200, description = "Insert result", body = InsertResult),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn create_course(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<Json<InsertResult>, AppError> {
    let result = CourseService::create_course(&state.db, dto).await?;
    Ok(Json(result))
}

/// Confirm enrollment: take one seat and add one student
#[utoipa::path(
    patch,
    path = "/courses/enroll/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Update result; zero counts when the course is full or absent", body = UpdateResult),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn enroll(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = CourseService::enroll(&state.db, id).await?;
    Ok(Json(result))
}

/// Delete a course (admin only)
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Delete result (zero count if absent)", body = DeleteResult),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn delete_course(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = CourseService::delete_course(&state.db, id).await?;
    Ok(Json(result))
}

/// Courses the caller has paid for
#[utoipa::path(
    get,
    path = "/enrolled-courses",
    params(EmailQuery),
    responses(
        (status = 200, description = "Paid courses; empty when no email is given", body = Vec<Course>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email is not the caller's", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_enrolled_courses(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<Course>>, AppError> {
    let Some(email) = query.email() else {
        return Ok(Json(Vec::new()));
    };
    auth_user.ensure_email(email)?;

    let courses = CourseService::get_enrolled_courses(&state.db, email).await?;
    Ok(Json(courses))
}
