use clickcrafters_core::{DeleteResult, ErrorResponse, InsertResult, MessageResponse, UpdateResult};
use clickcrafters_models::{
    AdminStatusResponse, ApprovalResponse, ClassStatus, Course, CreateCourseDto,
    CreateInstructorDto, CreateInstructorResponse, CreatePaymentDto, CreatePendingClassDto,
    CreateSelectedCourseDto, CreateUserDto, CreateUserResponse, Instructor,
    InstructorStatusResponse, Payment, PaymentIntentRequestDto, PaymentIntentResponse,
    PendingClass, RecordPaymentResponse, RoleResponse, SelectedCourse, TokenResponse, User,
    UserRole,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::health::controller::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::root,
        crate::modules::health::controller::health,
        crate::modules::auth::controller::issue_token,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::check_admin,
        crate::modules::users::controller::get_role,
        crate::modules::users::controller::make_admin,
        crate::modules::users::controller::make_instructor,
        crate::modules::users::controller::delete_user,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_popular_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::enroll,
        crate::modules::courses::controller::delete_course,
        crate::modules::courses::controller::get_enrolled_courses,
        crate::modules::instructors::controller::get_instructors,
        crate::modules::instructors::controller::get_popular_instructors,
        crate::modules::instructors::controller::create_instructor,
        crate::modules::classes::controller::get_my_classes,
        crate::modules::classes::controller::submit_class,
        crate::modules::classes::controller::check_instructor,
        crate::modules::classes::controller::get_pending_classes,
        crate::modules::classes::controller::approve_class,
        crate::modules::classes::controller::delete_class,
        crate::modules::selected_courses::controller::get_selected_courses,
        crate::modules::selected_courses::controller::select_course,
        crate::modules::selected_courses::controller::remove_selected_course,
        crate::modules::payments::controller::create_payment_intent,
        crate::modules::payments::controller::record_payment,
        crate::modules::payments::controller::get_payments,
    ),
    components(
        schemas(
            ErrorResponse,
            MessageResponse,
            InsertResult,
            UpdateResult,
            DeleteResult,
            HealthResponse,
            TokenResponse,
            User,
            UserRole,
            CreateUserDto,
            CreateUserResponse,
            AdminStatusResponse,
            InstructorStatusResponse,
            RoleResponse,
            Course,
            CreateCourseDto,
            Instructor,
            CreateInstructorDto,
            CreateInstructorResponse,
            PendingClass,
            ClassStatus,
            CreatePendingClassDto,
            ApprovalResponse,
            SelectedCourse,
            CreateSelectedCourseDto,
            Payment,
            CreatePaymentDto,
            RecordPaymentResponse,
            PaymentIntentRequestDto,
            PaymentIntentResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Authentication", description = "Token issuance"),
        (name = "Users", description = "Users and role management"),
        (name = "Courses", description = "Course catalogue and enrollment"),
        (name = "Instructors", description = "Instructor profiles"),
        (name = "Classes", description = "Instructor submissions and admin approval"),
        (name = "Selected Courses", description = "Per-user course selections"),
        (name = "Payments", description = "Payment intents and payment records")
    ),
    info(
        title = "ClickCrafters API",
        version = "0.1.0",
        description = "Backend for an online course marketplace: courses, instructors, selections and payments.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes_and_bearer_scheme() {
        let doc = ApiDoc::openapi();

        for path in [
            "/jwt",
            "/users/admin/{email}",
            "/courses/enroll/{id}",
            "/pending-classes/approve/{id}",
            "/create-payment-intent",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }

        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
