//! Stripe implementation of [`PaymentProvider`].
//!
//! Talks to `POST {api_base}/payment_intents` with a form-encoded body and
//! the secret key as a bearer token. No retries: a failed call surfaces to
//! the client, which can simply request a new intent.

use std::time::Duration;

use async_trait::async_trait;
use clickcrafters_config::PaymentConfig;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::provider::{PaymentError, PaymentIntent, PaymentIntentRequest, PaymentProvider};

#[derive(Debug, Clone)]
pub struct StripeClient {
    client: reqwest::Client,
    base_url: String,
    secret_key: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
}

impl StripeClient {
    pub fn new(config: &PaymentConfig) -> Result<Self, PaymentError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PaymentError::NotConfigured(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.api_base.trim_end_matches('/').to_string(),
            secret_key: config.secret_key.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/payment_intents", self.base_url)
    }
}

#[async_trait]
impl PaymentProvider for StripeClient {
    #[instrument(skip(self, request), fields(payment.amount = request.amount, payment.currency = %request.currency))]
    async fn create_payment_intent(
        &self,
        request: PaymentIntentRequest,
    ) -> Result<PaymentIntent, PaymentError> {
        if self.secret_key.is_empty() {
            return Err(PaymentError::NotConfigured(
                "STRIPE_SECRET_KEY is not set".to_string(),
            ));
        }

        let endpoint = self.endpoint();

        let mut form = vec![
            ("amount", request.amount.to_string()),
            ("currency", request.currency.clone()),
        ];
        for method in &request.payment_method_types {
            form.push(("payment_method_types[]", method.clone()));
        }

        let resp = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await
            .map_err(|source| PaymentError::Http {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<StripeErrorBody>(&body)
                .ok()
                .and_then(|b| b.error.message)
                .unwrap_or(body);
            warn!(status = %status.as_u16(), error = %message, "Payment intent request rejected");
            return Err(PaymentError::Api {
                endpoint,
                status: status.as_u16(),
                message,
            });
        }

        let intent = resp
            .json::<PaymentIntent>()
            .await
            .map_err(|source| PaymentError::Deserialization {
                endpoint: endpoint.clone(),
                source,
            })?;

        debug!(payment_intent.id = %intent.id, "Payment intent created");
        Ok(intent)
    }
}
