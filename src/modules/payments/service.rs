use anyhow::anyhow;
use clickcrafters_core::{AppError, DeleteResult, InsertResult};
use clickcrafters_models::payments::{CreatePaymentDto, Payment, RecordPaymentResponse};
use clickcrafters_payments::{PaymentError, PaymentIntentRequest, PaymentProvider, to_minor_units};
use sqlx::PgPool;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

pub struct PaymentService;

impl PaymentService {
    /// Asks the provider for a card payment intent and returns its client secret.
    #[instrument(skip(provider), fields(payment.currency = %currency))]
    pub async fn create_payment_intent(
        provider: &dyn PaymentProvider,
        price: f64,
        currency: &str,
    ) -> Result<String, AppError> {
        let amount = to_minor_units(price).map_err(map_payment_error)?;

        let intent = provider
            .create_payment_intent(PaymentIntentRequest::card(amount, currency))
            .await
            .map_err(map_payment_error)?;

        info!(payment_intent.id = %intent.id, payment.amount = amount, "Payment intent created");
        Ok(intent.client_secret)
    }

    /// Stores the payment and clears the paid cart entry in one transaction.
    #[instrument(skip(db, dto), fields(course.id = %dto.course_id, db.operation = "INSERT", db.table = "payments"))]
    pub async fn record_payment(
        db: &PgPool,
        dto: CreatePaymentDto,
        default_currency: &str,
    ) -> Result<RecordPaymentResponse, AppError> {
        let currency = dto
            .currency
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(default_currency)
            .to_lowercase();

        let mut tx = db.begin().await.map_err(AppError::database)?;

        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO payments
                (email, transaction_id, amount, currency, course_id, selected_course_id, course_name)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id",
        )
        .bind(&dto.email)
        .bind(&dto.transaction_id)
        .bind(dto.amount)
        .bind(&currency)
        .bind(dto.course_id)
        .bind(dto.selected_course_id)
        .bind(&dto.course_name)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::database)?;

        let deleted = match dto.selected_course_id {
            Some(selected_id) => sqlx::query(
                "DELETE FROM selected_courses WHERE id = $1 AND email = $2",
            )
            .bind(selected_id)
            .bind(&dto.email)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?
            .rows_affected(),
            None => 0,
        };

        tx.commit().await.map_err(AppError::database)?;

        info!(payment.id = %id, selected_courses.deleted = deleted, "Payment recorded");
        Ok(RecordPaymentResponse {
            insert_result: InsertResult::new(id),
            delete_result: DeleteResult::new(deleted),
        })
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "payments"))]
    pub async fn get_payments(db: &PgPool, email: &str) -> Result<Vec<Payment>, AppError> {
        let payments = sqlx::query_as::<_, Payment>(
            "SELECT id, email, transaction_id, amount, currency, course_id,
                    selected_course_id, course_name, created_at
             FROM payments
             WHERE email = $1
             ORDER BY created_at DESC",
        )
        .bind(email)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(payments)
    }
}

/// Caller mistakes become 400; provider failures become 502.
fn map_payment_error(err: PaymentError) -> AppError {
    if err.is_client_error() {
        warn!(error = %err, "Rejected payment request");
        AppError::bad_request(anyhow!(err))
    } else {
        error!(error = %err, "Payment provider call failed");
        AppError::bad_gateway(anyhow!(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use clickcrafters_payments::mock::MockPaymentProvider;

    #[tokio::test]
    async fn test_payment_intent_uses_minor_units_and_currency() {
        let provider = MockPaymentProvider::new();

        let secret = PaymentService::create_payment_intent(&provider, 19.99, "usd")
            .await
            .unwrap();

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].amount, 1999);
        assert_eq!(requests[0].currency, "usd");
        assert_eq!(requests[0].payment_method_types, vec!["card".to_string()]);
        assert!(secret.contains("_secret_"));
    }

    #[tokio::test]
    async fn test_invalid_price_is_bad_request_without_provider_call() {
        let provider = MockPaymentProvider::new();

        for price in [0.0, -5.0, f64::NAN] {
            let err = PaymentService::create_payment_intent(&provider, price, "usd")
                .await
                .unwrap_err();
            assert_eq!(err.status, StatusCode::BAD_REQUEST);
        }
        assert!(provider.requests().is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_is_bad_gateway() {
        let provider = MockPaymentProvider::failing();

        let err = PaymentService::create_payment_intent(&provider, 10.0, "usd")
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
    }
}
