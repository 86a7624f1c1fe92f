use axum::{Json, extract::State};
use clickcrafters_core::{AppError, ErrorResponse};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::state::AppState;

pub const LIVENESS_MESSAGE: &str = "ClickCrafters server is running";

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Server is up", body = String, content_type = "text/plain")),
    tag = "Health"
)]
pub async fn root() -> &'static str {
    LIVENESS_MESSAGE
}

/// Readiness probe: checks the database connection
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 500, description = "Database unreachable", body = ErrorResponse)
    ),
    tag = "Health"
)]
#[instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    clickcrafters_db::ping(&state.db)
        .await
        .map_err(AppError::database)?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}
