use std::fmt;
use std::sync::Arc;

use anyhow::Context;
use clickcrafters_config::{CorsConfig, DatabaseConfig, JwtConfig, PaymentConfig};
use clickcrafters_db::{PgPool, init_db_pool, run_migrations};
use clickcrafters_payments::{PaymentProvider, StripeClient};
use tracing::warn;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub payment_config: PaymentConfig,
    pub payments: Arc<dyn PaymentProvider>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("jwt_config.token_expiry", &self.jwt_config.token_expiry)
            .field("cors_config", &self.cors_config)
            .field("payment_config.currency", &self.payment_config.currency)
            .finish_non_exhaustive()
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let db_config = DatabaseConfig::from_env().context("DATABASE_URL must be set")?;
    let db = init_db_pool(&db_config)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&db)
        .await
        .context("Failed to run database migrations")?;

    let jwt_config = JwtConfig::from_env();
    if jwt_config.uses_default_secret() {
        warn!("JWT_SECRET is not set; using the development secret");
    }

    let payment_config = PaymentConfig::from_env();
    if payment_config.secret_key.is_empty() {
        warn!("STRIPE_SECRET_KEY is not set; payment intents will fail");
    }
    let payments = StripeClient::new(&payment_config).context("Failed to build payment client")?;

    Ok(AppState {
        db,
        jwt_config,
        cors_config: CorsConfig::from_env(),
        payment_config,
        payments: Arc::new(payments),
    })
}
