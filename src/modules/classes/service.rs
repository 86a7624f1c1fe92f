use clickcrafters_core::{AppError, DeleteResult, InsertResult, UpdateResult};
use clickcrafters_models::classes::{
    ApprovalResponse, ClassStatus, CreatePendingClassDto, PendingClass,
};
use sqlx::PgPool;
use tracing::{info, instrument, warn};
use uuid::Uuid;

const PENDING_CLASS_COLUMNS: &str = "id, name, image, instructor_name, instructor_email, price, \
     available_seat, status, course_id, created_at";

pub struct ClassService;

impl ClassService {
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "pending_classes"))]
    pub async fn get_classes_by_instructor(
        db: &PgPool,
        email: &str,
    ) -> Result<Vec<PendingClass>, AppError> {
        let classes = sqlx::query_as::<_, PendingClass>(&format!(
            "SELECT {PENDING_CLASS_COLUMNS} FROM pending_classes
             WHERE instructor_email = $1
             ORDER BY created_at DESC"
        ))
        .bind(email)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(classes)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "pending_classes"))]
    pub async fn get_pending_classes(db: &PgPool) -> Result<Vec<PendingClass>, AppError> {
        let classes = sqlx::query_as::<_, PendingClass>(&format!(
            "SELECT {PENDING_CLASS_COLUMNS} FROM pending_classes ORDER BY created_at"
        ))
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(classes)
    }

    #[instrument(skip(db, dto), fields(class.name = %dto.name, db.operation = "INSERT", db.table = "pending_classes"))]
    pub async fn submit_class(
        db: &PgPool,
        instructor_email: &str,
        dto: CreatePendingClassDto,
    ) -> Result<InsertResult, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO pending_classes
                (name, image, instructor_name, instructor_email, price, available_seat, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id",
        )
        .bind(&dto.name)
        .bind(&dto.image)
        .bind(&dto.instructor_name)
        .bind(instructor_email)
        .bind(dto.price)
        .bind(dto.available_seat)
        .bind(ClassStatus::Pending)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        info!(class.id = %id, "Class submitted for review");
        Ok(InsertResult::new(id))
    }

    /// Publishes a submission as a live course.
    ///
    /// The submission row is locked for the duration of the transaction, so
    /// approving the same submission twice creates exactly one course.
    #[instrument(skip(db), fields(db.operation = "UPDATE", db.table = "pending_classes"))]
    pub async fn approve_class(db: &PgPool, id: Uuid) -> Result<ApprovalResponse, AppError> {
        let mut tx = db.begin().await.map_err(AppError::database)?;

        let submission = sqlx::query_as::<_, PendingClass>(&format!(
            "SELECT {PENDING_CLASS_COLUMNS} FROM pending_classes WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::database)?;

        let Some(submission) = submission else {
            warn!(class.id = %id, "Approval requested for unknown submission");
            return Ok(ApprovalResponse {
                course: None,
                submission: UpdateResult::none(),
            });
        };

        if submission.status == ClassStatus::Approve {
            return Ok(ApprovalResponse {
                course: None,
                submission: UpdateResult::new(1, 0),
            });
        }

        let course_id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO courses (name, image, instructor_name, instructor_email, price, available_seat)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(&submission.name)
        .bind(&submission.image)
        .bind(&submission.instructor_name)
        .bind(&submission.instructor_email)
        .bind(submission.price)
        .bind(submission.available_seat)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::database)?;

        let updated = sqlx::query(
            "UPDATE pending_classes SET status = $1, course_id = $2 WHERE id = $3",
        )
        .bind(ClassStatus::Approve)
        .bind(course_id)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::database)?;

        tx.commit().await.map_err(AppError::database)?;

        info!(class.id = %id, course.id = %course_id, "Class approved");
        Ok(ApprovalResponse {
            course: Some(InsertResult::new(course_id)),
            submission: UpdateResult::from_rows_affected(updated.rows_affected()),
        })
    }

    /// Removes a submission. An already published course is left in place.
    #[instrument(skip(db), fields(db.operation = "DELETE", db.table = "pending_classes"))]
    pub async fn delete_class(db: &PgPool, id: Uuid) -> Result<DeleteResult, AppError> {
        let result = sqlx::query("DELETE FROM pending_classes WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        Ok(DeleteResult::new(result.rows_affected()))
    }
}
