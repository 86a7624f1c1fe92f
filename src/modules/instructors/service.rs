use clickcrafters_core::{AppError, InsertResult, MessageResponse};
use clickcrafters_models::instructors::{CreateInstructorDto, CreateInstructorResponse, Instructor};
use sqlx::PgPool;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::modules::courses::service::POPULAR_LIMIT;

pub const INSTRUCTOR_EXISTS_MESSAGE: &str = "Instructor is already exist";

const INSTRUCTOR_COLUMNS: &str = "id, name, email, image, classes_taken, bio, created_at";

pub struct InstructorService;

impl InstructorService {
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "instructors"))]
    pub async fn get_instructors(db: &PgPool) -> Result<Vec<Instructor>, AppError> {
        let instructors = sqlx::query_as::<_, Instructor>(&format!(
            "SELECT {INSTRUCTOR_COLUMNS} FROM instructors ORDER BY name"
        ))
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(instructors)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "instructors"))]
    pub async fn get_popular_instructors(db: &PgPool) -> Result<Vec<Instructor>, AppError> {
        let instructors = sqlx::query_as::<_, Instructor>(&format!(
            "SELECT {INSTRUCTOR_COLUMNS} FROM instructors
             ORDER BY classes_taken DESC, name
             LIMIT $1"
        ))
        .bind(POPULAR_LIMIT)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(instructors)
    }

    #[instrument(skip(db, dto), fields(instructor.email = %dto.email, db.operation = "INSERT", db.table = "instructors"))]
    pub async fn create_instructor(
        db: &PgPool,
        dto: CreateInstructorDto,
    ) -> Result<CreateInstructorResponse, AppError> {
        let inserted = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO instructors (name, email, image, classes_taken, bio)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (email) DO NOTHING
             RETURNING id",
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.image)
        .bind(dto.classes_taken)
        .bind(&dto.bio)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?;

        Ok(match inserted {
            Some(id) => {
                info!(instructor.id = %id, "Instructor profile created");
                CreateInstructorResponse::Created(InsertResult::new(id))
            }
            None => CreateInstructorResponse::AlreadyExists(MessageResponse::new(
                INSTRUCTOR_EXISTS_MESSAGE,
            )),
        })
    }
}
