use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Errors from the payment bridge.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("invalid payment amount: {0}")]
    InvalidAmount(f64),
    #[error("payment provider is not configured: {0}")]
    NotConfigured(String),
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    #[error("payment provider {endpoint} returned {status}: {message}")]
    Api {
        endpoint: String,
        status: u16,
        message: String,
    },
    #[error("failed to decode response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
}

impl PaymentError {
    /// Whether the error was caused by the caller's input rather than the provider.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PaymentError::InvalidAmount(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentIntentRequest {
    /// Amount in minor currency units.
    pub amount: i64,
    pub currency: String,
    pub payment_method_types: Vec<String>,
}

impl PaymentIntentRequest {
    pub fn card(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            payment_method_types: vec!["card".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
    pub amount: i64,
    pub currency: String,
}

#[async_trait]
pub trait PaymentProvider: Send + Sync {
    async fn create_payment_intent(
        &self,
        request: PaymentIntentRequest,
    ) -> Result<PaymentIntent, PaymentError>;
}
