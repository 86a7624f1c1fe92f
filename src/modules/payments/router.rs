use crate::modules::payments::controller::{create_payment_intent, get_payments, record_payment};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_payments_router() -> Router<AppState> {
    Router::new().route("/", get(get_payments).post(record_payment))
}

pub fn init_payment_intent_router() -> Router<AppState> {
    Router::new().route("/", post(create_payment_intent))
}
