//! In-memory provider for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::provider::{PaymentError, PaymentIntent, PaymentIntentRequest, PaymentProvider};

/// Records every request and answers with a deterministic intent, or with
/// an API error when built with [`MockPaymentProvider::failing`].
#[derive(Debug, Default)]
pub struct MockPaymentProvider {
    requests: Mutex<Vec<PaymentIntentRequest>>,
    fail: bool,
}

impl MockPaymentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn requests(&self) -> Vec<PaymentIntentRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_payment_intent(
        &self,
        request: PaymentIntentRequest,
    ) -> Result<PaymentIntent, PaymentError> {
        let index = {
            let mut requests = self.requests.lock().map_err(|_| {
                PaymentError::NotConfigured("mock provider lock poisoned".to_string())
            })?;
            requests.push(request.clone());
            requests.len()
        };

        if self.fail {
            return Err(PaymentError::Api {
                endpoint: "mock".to_string(),
                status: 402,
                message: "Your card was declined.".to_string(),
            });
        }

        Ok(PaymentIntent {
            id: format!("pi_mock_{index}"),
            client_secret: format!("pi_mock_{index}_secret_{}", request.amount),
            amount: request.amount,
            currency: request.currency,
        })
    }
}
