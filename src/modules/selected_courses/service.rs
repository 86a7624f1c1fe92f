use anyhow::anyhow;
use clickcrafters_core::{AppError, DeleteResult, InsertResult};
use clickcrafters_models::selected_courses::{CreateSelectedCourseDto, SelectedCourse};
use sqlx::PgPool;
use tracing::{info, instrument};
use uuid::Uuid;

pub const UNKNOWN_COURSE_MESSAGE: &str = "course does not exist";

pub struct SelectedCourseService;

impl SelectedCourseService {
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "selected_courses"))]
    pub async fn get_selected_courses(
        db: &PgPool,
        email: &str,
    ) -> Result<Vec<SelectedCourse>, AppError> {
        let entries = sqlx::query_as::<_, SelectedCourse>(
            "SELECT id, email, course_id, name, image, instructor_name, price, created_at
             FROM selected_courses
             WHERE email = $1
             ORDER BY created_at",
        )
        .bind(email)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(entries)
    }

    #[instrument(skip(db, dto), fields(course.id = %dto.course_id, db.operation = "INSERT", db.table = "selected_courses"))]
    pub async fn select_course(
        db: &PgPool,
        dto: CreateSelectedCourseDto,
    ) -> Result<InsertResult, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO selected_courses (email, course_id, name, image, instructor_name, price)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(&dto.email)
        .bind(dto.course_id)
        .bind(&dto.name)
        .bind(&dto.image)
        .bind(&dto.instructor_name)
        .bind(dto.price)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_foreign_key_violation()
            {
                return AppError::unprocessable(anyhow!(UNKNOWN_COURSE_MESSAGE));
            }
            AppError::database(e)
        })?;

        info!(selected_course.id = %id, "Course added to selection");
        Ok(InsertResult::new(id))
    }

    /// Deletes an entry owned by `email`; entries of other users are untouched.
    #[instrument(skip(db), fields(db.operation = "DELETE", db.table = "selected_courses"))]
    pub async fn remove_selected_course(
        db: &PgPool,
        id: Uuid,
        email: &str,
    ) -> Result<DeleteResult, AppError> {
        let result = sqlx::query("DELETE FROM selected_courses WHERE id = $1 AND email = $2")
            .bind(id)
            .bind(email)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        Ok(DeleteResult::new(result.rows_affected()))
    }
}
