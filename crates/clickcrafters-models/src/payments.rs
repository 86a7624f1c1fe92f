//! Payment intents and payment records.

use clickcrafters_core::{DeleteResult, InsertResult};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A completed payment, recorded after the client confirms the charge.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Payment {
    pub id: Uuid,
    pub email: String,
    /// Provider reference for the charge.
    pub transaction_id: String,
    /// Amount in major currency units.
    pub amount: f64,
    pub currency: String,
    pub course_id: Uuid,
    pub selected_course_id: Option<Uuid>,
    pub course_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreatePaymentDto {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "transaction_id is required"))]
    pub transaction_id: String,
    #[validate(range(min = 0.0, message = "amount cannot be negative"))]
    pub amount: f64,
    /// Defaults to the configured currency.
    pub currency: Option<String>,
    pub course_id: Uuid,
    /// Cart entry to remove once the payment is stored.
    pub selected_course_id: Option<Uuid>,
    #[serde(default)]
    pub course_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentResponse {
    pub insert_result: InsertResult,
    pub delete_result: DeleteResult,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct PaymentIntentRequestDto {
    /// Price in major currency units.
    pub price: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct PaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_secret_field_name() {
        let json = serde_json::to_value(PaymentIntentResponse {
            client_secret: "pi_123_secret_456".to_string(),
        })
        .unwrap();
        assert_eq!(json["clientSecret"], "pi_123_secret_456");
    }

    #[test]
    fn test_record_payment_response_camel_case() {
        let id = Uuid::new_v4();
        let json = serde_json::to_value(RecordPaymentResponse {
            insert_result: InsertResult::new(id),
            delete_result: DeleteResult::new(1),
        })
        .unwrap();
        assert_eq!(json["insertResult"]["insertedId"], id.to_string());
        assert_eq!(json["deleteResult"]["deletedCount"], 1);
    }
}
