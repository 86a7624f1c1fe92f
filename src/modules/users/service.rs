use clickcrafters_core::{AppError, DeleteResult, InsertResult, MessageResponse, UpdateResult};
use clickcrafters_models::users::{CreateUserDto, CreateUserResponse, User, UserRole};
use sqlx::PgPool;
use tracing::{debug, info, instrument};
use uuid::Uuid;

pub const USER_EXISTS_MESSAGE: &str = "User is already exist";

pub struct UserService;

impl UserService {
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "users"))]
    pub async fn get_users(db: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, photo_url, role, created_at
             FROM users
             ORDER BY created_at",
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(users)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "users"))]
    pub async fn find_role_by_email(db: &PgPool, email: &str) -> Result<Option<UserRole>, AppError> {
        let role = sqlx::query_scalar::<_, UserRole>("SELECT role FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?;

        Ok(role)
    }

    /// Inserts the user unless the email is already registered.
    ///
    /// The lookup answers the common case; `ON CONFLICT` covers two sign-ins
    /// racing past it.
    #[instrument(skip(db, dto), fields(user.email = %dto.email, db.operation = "INSERT", db.table = "users"))]
    pub async fn create_user(db: &PgPool, dto: CreateUserDto) -> Result<CreateUserResponse, AppError> {
        let existing = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?;

        if existing.is_some() {
            debug!("User already exists");
            return Ok(CreateUserResponse::AlreadyExists(MessageResponse::new(
                USER_EXISTS_MESSAGE,
            )));
        }

        let inserted = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO users (name, email, photo_url)
             VALUES ($1, $2, $3)
             ON CONFLICT (email) DO NOTHING
             RETURNING id",
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.photo_url)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?;

        match inserted {
            Some(id) => {
                info!(user.id = %id, "User created");
                Ok(CreateUserResponse::Created(InsertResult::new(id)))
            }
            None => Ok(CreateUserResponse::AlreadyExists(MessageResponse::new(
                USER_EXISTS_MESSAGE,
            ))),
        }
    }

    /// Sets a single user's role.
    ///
    /// `modified_count` is zero when the user already had the role.
    #[instrument(skip(db), fields(db.operation = "UPDATE", db.table = "users"))]
    pub async fn set_role(db: &PgPool, id: Uuid, role: UserRole) -> Result<UpdateResult, AppError> {
        let (matched, modified) = sqlx::query_as::<_, (i64, i64)>(
            "WITH target AS (
                 SELECT id, role FROM users WHERE id = $1
             ),
             updated AS (
                 UPDATE users u SET role = $2
                 FROM target t
                 WHERE u.id = t.id AND t.role <> $2
                 RETURNING u.id
             )
             SELECT (SELECT COUNT(*) FROM target), (SELECT COUNT(*) FROM updated)",
        )
        .bind(id)
        .bind(role)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        if modified > 0 {
            info!(user.id = %id, user.role = %role, "User role updated");
        }

        Ok(UpdateResult::new(matched as u64, modified as u64))
    }

    #[instrument(skip(db), fields(db.operation = "DELETE", db.table = "users"))]
    pub async fn delete_user(db: &PgPool, id: Uuid) -> Result<DeleteResult, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        Ok(DeleteResult::new(result.rows_affected()))
    }
}
