use crate::modules::users::controller::{
    check_admin, create_user, delete_user, get_role, get_users, make_admin, make_instructor,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, patch},
};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users).post(create_user))
        // GET takes an email, PATCH a user id
        .route("/admin/{key}", get(check_admin).patch(make_admin))
        .route("/instructor/{id}", patch(make_instructor))
        .route("/role/{email}", get(get_role))
        .route("/delete/{id}", delete(delete_user))
}
