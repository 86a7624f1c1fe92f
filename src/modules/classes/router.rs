use crate::modules::classes::controller::{
    approve_class, check_instructor, delete_class, get_my_classes, get_pending_classes,
    submit_class,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, patch},
};

pub fn init_my_classes_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_my_classes).post(submit_class))
        .route("/instructor/{email}", get(check_instructor))
}

pub fn init_pending_classes_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_pending_classes))
        .route("/approve/{id}", patch(approve_class))
        .route("/{id}", delete(delete_class))
}
