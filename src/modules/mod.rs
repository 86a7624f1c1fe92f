pub mod auth;
pub mod classes;
pub mod courses;
pub mod health;
pub mod instructors;
pub mod payments;
pub mod selected_courses;
pub mod users;
