//! # ClickCrafters Payments
//!
//! Bridge to the external payment provider.
//!
//! The API only ever asks the provider for one thing: a payment intent for a
//! given amount, whose client secret the browser uses to confirm the charge.
//! The provider is abstracted behind [`PaymentProvider`] so handlers can be
//! exercised without network access.
//!
//! - [`provider`]: The trait, request/response types and errors
//! - [`stripe`]: Stripe implementation over HTTPS
//! - [`amount`]: Major → minor currency unit conversion
//!
//! # Example
//!
//! ```ignore
//! use clickcrafters_config::PaymentConfig;
//! use clickcrafters_payments::{PaymentIntentRequest, PaymentProvider, StripeClient, to_minor_units};
//!
//! let client = StripeClient::new(&PaymentConfig::from_env())?;
//! let intent = client
//!     .create_payment_intent(PaymentIntentRequest::card(to_minor_units(19.99)?, "usd"))
//!     .await?;
//! println!("{}", intent.client_secret);
//! ```

pub mod amount;
pub mod provider;
pub mod stripe;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

// Re-export commonly used types at crate root
pub use amount::to_minor_units;
pub use provider::{PaymentError, PaymentIntent, PaymentIntentRequest, PaymentProvider};
pub use stripe::StripeClient;
