use clickcrafters_core::{AppError, DeleteResult, InsertResult, UpdateResult};
use clickcrafters_models::courses::{Course, CreateCourseDto};
use sqlx::PgPool;
use tracing::{info, instrument, warn};
use uuid::Uuid;

const COURSE_COLUMNS: &str =
    "id, name, image, instructor_name, instructor_email, price, available_seat, students, created_at";

/// How many entries the "popular" listings return.
pub const POPULAR_LIMIT: i64 = 6;

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "courses"))]
    pub async fn get_courses(db: &PgPool) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses ORDER BY created_at"
        ))
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(courses)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "courses"))]
    pub async fn get_popular_courses(db: &PgPool) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses ORDER BY students DESC, created_at LIMIT $1"
        ))
        .bind(POPULAR_LIMIT)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(courses)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "courses"))]
    pub async fn get_course(db: &PgPool, id: Uuid) -> Result<Option<Course>, AppError> {
        let course = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?;

        Ok(course)
    }

    /// Courses the given email has a payment record for.
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "courses"))]
    pub async fn get_enrolled_courses(db: &PgPool, email: &str) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses
             WHERE id IN (SELECT course_id FROM payments WHERE email = $1)
             ORDER BY name"
        ))
        .bind(email)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(courses)
    }

    #[instrument(skip(db, dto), fields(course.name = %dto.name, db.operation = "INSERT", db.table = "courses"))]
    pub async fn create_course(db: &PgPool, dto: CreateCourseDto) -> Result<InsertResult, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO courses (name, image, instructor_name, instructor_email, price, available_seat)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(&dto.name)
        .bind(&dto.image)
        .bind(&dto.instructor_name)
        .bind(&dto.instructor_email)
        .bind(dto.price)
        .bind(dto.available_seat)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        info!(course.id = %id, "Course created");
        Ok(InsertResult::new(id))
    }

    /// Takes one seat and counts one more student in a single statement.
    ///
    /// Concurrent enrollments cannot oversell: a full course matches no row
    /// and the result reports zero counts.
    #[instrument(skip(db), fields(db.operation = "UPDATE", db.table = "courses"))]
    pub async fn enroll(db: &PgPool, id: Uuid) -> Result<UpdateResult, AppError> {
        let result = sqlx::query(
            "UPDATE courses
             SET available_seat = available_seat - 1, students = students + 1
             WHERE id = $1 AND available_seat > 0",
        )
        .bind(id)
        .execute(db)
        .await
        .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            warn!(course.id = %id, "Enrollment rejected: course missing or full");
        }

        Ok(UpdateResult::from_rows_affected(result.rows_affected()))
    }

    #[instrument(skip(db), fields(db.operation = "DELETE", db.table = "courses"))]
    pub async fn delete_course(db: &PgPool, id: Uuid) -> Result<DeleteResult, AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        Ok(DeleteResult::new(result.rows_affected()))
    }
}
