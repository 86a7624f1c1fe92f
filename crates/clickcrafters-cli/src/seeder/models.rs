//! Generated rows and seeding configuration.

use clickcrafters_models::users::UserRole;

pub struct UserSeed {
    pub name: String,
    pub email: String,
    pub photo_url: Option<String>,
    pub role: UserRole,
}

pub struct InstructorSeed {
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub classes_taken: i32,
    pub bio: Option<String>,
}

/// Shared by courses and pending submissions.
pub struct CourseSeed {
    pub name: String,
    pub image: Option<String>,
    pub instructor_name: String,
    pub instructor_email: String,
    pub price: f64,
    pub available_seat: i32,
}

/// How many rows of each kind to generate.
#[derive(Debug, Clone, Copy)]
pub struct SeedConfig {
    pub students: usize,
    pub instructors: usize,
    /// Courses per instructor.
    pub courses_per_instructor: usize,
    /// Pending submissions per instructor.
    pub pending_per_instructor: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            students: 50,
            instructors: 6,
            courses_per_instructor: 2,
            pending_per_instructor: 1,
        }
    }
}
