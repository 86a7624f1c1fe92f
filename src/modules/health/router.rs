use crate::modules::health::controller::{health, root};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_health_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}
