use axum::{Json, extract::State};
use clickcrafters_auth::create_token;
use clickcrafters_core::{AppError, ErrorResponse};
use clickcrafters_models::auth::{TokenRequest, TokenResponse};
use tracing::{info, instrument};

use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Issue an access token
///
/// The body must carry an `email`; every other field is copied into the
/// token payload.
#[utoipa::path(
    post,
    path = "/jwt",
    request_body(
        content = serde_json::Value,
        description = "Object with an `email` field plus optional profile fields",
        example = json!({"email": "ada@example.com", "name": "Ada"})
    ),
    responses(
        (status = 200, description = "Signed token", body = TokenResponse),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 422, description = "Missing or invalid email", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto), fields(user.email = %dto.email))]
pub async fn issue_token(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = create_token(&dto.email, dto.extra, &state.jwt_config)?;

    info!("Access token issued");
    Ok(Json(TokenResponse { token }))
}
