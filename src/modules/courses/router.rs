use crate::modules::courses::controller::{
    create_course, delete_course, enroll, get_course, get_courses, get_enrolled_courses,
    get_popular_courses,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch},
};

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_courses).post(create_course))
        .route("/popular", get(get_popular_courses))
        .route("/enroll/{id}", patch(enroll))
        .route("/{id}", get(get_course).delete(delete_course))
}

pub fn init_enrolled_courses_router() -> Router<AppState> {
    Router::new().route("/", get(get_enrolled_courses))
}
