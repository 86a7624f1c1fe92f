//! Payment provider settings.
//!
//! # Environment Variables
//!
//! - `STRIPE_SECRET_KEY`: Secret API key (empty disables real charges)
//! - `STRIPE_API_BASE`: API root (default: `https://api.stripe.com/v1`)
//! - `PAYMENT_CURRENCY`: ISO currency code (default: `usd`)
//! - `PAYMENT_TIMEOUT_SECS`: Request timeout (default: 30)

use std::env;

use crate::env_parse;

#[derive(Clone, Debug)]
pub struct PaymentConfig {
    pub secret_key: String,
    pub api_base: String,
    pub currency: String,
    pub timeout_secs: u64,
}

impl PaymentConfig {
    pub fn from_env() -> Self {
        Self {
            secret_key: env::var("STRIPE_SECRET_KEY").unwrap_or_default(),
            api_base: env::var("STRIPE_API_BASE")
                .unwrap_or_else(|_| "https://api.stripe.com/v1".to_string()),
            currency: env::var("PAYMENT_CURRENCY")
                .map(|c| c.to_lowercase())
                .unwrap_or_else(|_| "usd".to_string()),
            timeout_secs: env_parse("PAYMENT_TIMEOUT_SECS", 30),
        }
    }
}
