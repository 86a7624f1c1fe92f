use axum::{Json, extract::State};
use clickcrafters_core::{AppError, ErrorResponse};
use clickcrafters_models::instructors::{
    CreateInstructorDto, CreateInstructorResponse, Instructor,
};
use tracing::instrument;

use crate::middleware::role::AdminUser;
use crate::modules::instructors::service::InstructorService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List instructor profiles
#[utoipa::path(
    get,
    path = "/instructors",
    responses((status = 200, description = "All instructor profiles", body = Vec<Instructor>)),
    tag = "Instructors"
)]
#[instrument(skip(state))]
pub async fn get_instructors(
    State(state): State<AppState>,
) -> Result<Json<Vec<Instructor>>, AppError> {
    let instructors = InstructorService::get_instructors(&state.db).await?;
    Ok(Json(instructors))
}

/// List the instructors with the most classes
#[utoipa::path(
    get,
    path = "/instructors/popular",
    responses((status = 200, description = "Top instructors by classes taken", body = Vec<Instructor>)),
    tag = "Instructors"
)]
#[instrument(skip(state))]
pub async fn get_popular_instructors(
    State(state): State<AppState>,
) -> Result<Json<Vec<Instructor>>, AppError> {
    let instructors = InstructorService::get_popular_instructors(&state.db).await?;
    Ok(Json(instructors))
}

/// Add an instructor profile (admin only)
#[utoipa::path(
    post,
    path = "/instructors",
    request_body = CreateInstructorDto,
    responses(
        (status = 200, description = "Insert result, or a message if the email is already listed", body = CreateInstructorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Instructors"
)]
#[instrument(skip(state))]
pub async fn create_instructor(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(dto): ValidatedJson<CreateInstructorDto>,
) -> Result<Json<CreateInstructorResponse>, AppError> {
    let response = InstructorService::create_instructor(&state.db, dto).await?;
    Ok(Json(response))
}
