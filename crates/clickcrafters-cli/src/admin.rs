//! Admin account management.

use clickcrafters_models::users::UserRole;
use sqlx::PgPool;
use uuid::Uuid;

/// Creates the user as an admin, or promotes the existing user with that email.
///
/// Returns the user id.
pub async fn promote_to_admin(db: &PgPool, email: &str, name: &str) -> Result<Uuid, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (name, email, role)
         VALUES ($1, $2, $3)
         ON CONFLICT (email) DO UPDATE SET role = EXCLUDED.role
         RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(UserRole::Admin)
    .fetch_one(db)
    .await
}

/// Emails of every admin, oldest first.
pub async fn list_admins(db: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT email FROM users WHERE role = $1 ORDER BY created_at")
        .bind(UserRole::Admin)
        .fetch_all(db)
        .await
}
