use crate::modules::instructors::controller::{
    create_instructor, get_instructors, get_popular_instructors,
};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_instructors_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_instructors).post(create_instructor))
        .route("/popular", get(get_popular_instructors))
}
