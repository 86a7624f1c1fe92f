use crate::modules::selected_courses::controller::{
    get_selected_courses, remove_selected_course, select_course,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

pub fn init_selected_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_selected_courses).post(select_course))
        .route("/{id}", delete(remove_selected_course))
}
