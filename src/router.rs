use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::auth::router::init_auth_router;
use crate::modules::classes::router::{init_my_classes_router, init_pending_classes_router};
use crate::modules::courses::router::{init_courses_router, init_enrolled_courses_router};
use crate::modules::health::router::init_health_router;
use crate::modules::instructors::router::init_instructors_router;
use crate::modules::payments::router::{init_payment_intent_router, init_payments_router};
use crate::modules::selected_courses::router::init_selected_courses_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use clickcrafters_config::CorsConfig;
use tower_http::cors::{AllowOrigin, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

pub fn init_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_config);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(init_health_router())
        .nest("/jwt", init_auth_router())
        .nest("/users", init_users_router())
        .nest("/courses", init_courses_router())
        .nest("/enrolled-courses", init_enrolled_courses_router())
        .nest("/instructors", init_instructors_router())
        .nest("/my-classes", init_my_classes_router())
        .nest("/pending-classes", init_pending_classes_router())
        .nest("/selected-courses", init_selected_courses_router())
        .nest("/create-payment-intent", init_payment_intent_router())
        .nest("/payments", init_payments_router())
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}

/// Browsers may not send credentials to a wildcard origin, so `*` turns
/// credentials off.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]);

    if config.allows_any() {
        return layer.allow_origin(AllowOrigin::any());
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    layer
        .allow_origin(allowed_origins)
        .allow_credentials(true)
}
