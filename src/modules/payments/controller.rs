use axum::{
    Json,
    extract::{Query, State},
};
use clickcrafters_core::{AppError, ErrorResponse};
use clickcrafters_models::payments::{
    CreatePaymentDto, Payment, PaymentIntentRequestDto, PaymentIntentResponse,
    RecordPaymentResponse,
};
use clickcrafters_models::selected_courses::EmailQuery;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::payments::service::PaymentService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Create a card payment intent for a price
#[utoipa::path(
    post,
    path = "/create-payment-intent",
    request_body = PaymentIntentRequestDto,
    responses(
        (status = 200, description = "Client secret for confirming the charge", body = PaymentIntentResponse),
        (status = 400, description = "Price is not a positive amount", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 502, description = "Payment provider failed", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument(skip(state, dto), fields(user.email = %auth_user.email()))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<PaymentIntentRequestDto>,
) -> Result<Json<PaymentIntentResponse>, AppError> {
    let client_secret = PaymentService::create_payment_intent(
        state.payments.as_ref(),
        dto.price,
        &state.payment_config.currency,
    )
    .await?;

    Ok(Json(PaymentIntentResponse { client_secret }))
}

/// Record a completed payment and clear the paid selection
#[utoipa::path(
    post,
    path = "/payments",
    request_body = CreatePaymentDto,
    responses(
        (status = 200, description = "Payment insert and cart delete results", body = RecordPaymentResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email is not the caller's", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument(skip(state))]
pub async fn record_payment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreatePaymentDto>,
) -> Result<Json<RecordPaymentResponse>, AppError> {
    auth_user.ensure_email(&dto.email)?;

    let response =
        PaymentService::record_payment(&state.db, dto, &state.payment_config.currency).await?;
    Ok(Json(response))
}

/// List the caller's payments, newest first
#[utoipa::path(
    get,
    path = "/payments",
    params(EmailQuery),
    responses(
        (status = 200, description = "Payment history", body = Vec<Payment>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email is not the caller's", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument(skip(state))]
pub async fn get_payments(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<Payment>>, AppError> {
    let Some(email) = query.email() else {
        return Ok(Json(Vec::new()));
    };
    auth_user.ensure_email(email)?;

    let payments = PaymentService::get_payments(&state.db, email).await?;
    Ok(Json(payments))
}
