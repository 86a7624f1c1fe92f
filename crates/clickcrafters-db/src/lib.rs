//! # ClickCrafters DB
//!
//! The persistence gateway: one PostgreSQL connection pool opened at startup
//! and shared by every handler through the application state, plus the names
//! of the six collections the API works with.
//!
//! # Example
//!
//! ```ignore
//! use clickcrafters_config::DatabaseConfig;
//! use clickcrafters_db::{Collection, init_db_pool, run_migrations};
//!
//! let config = DatabaseConfig::from_env().expect("DATABASE_URL must be set");
//! let pool = init_db_pool(&config).await?;
//! run_migrations(&pool).await?;
//!
//! let users = clickcrafters_db::count(&pool, Collection::Users).await?;
//! ```

use std::fmt;

use clickcrafters_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, instrument};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Named collections (tables) owned by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Courses,
    SelectedCourses,
    Payments,
    Instructors,
    PendingClasses,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Users,
        Collection::Courses,
        Collection::SelectedCourses,
        Collection::Payments,
        Collection::Instructors,
        Collection::PendingClasses,
    ];

    pub const fn table(self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Courses => "courses",
            Collection::SelectedCourses => "selected_courses",
            Collection::Payments => "payments",
            Collection::Instructors => "instructors",
            Collection::PendingClasses => "pending_classes",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.table())
    }
}

/// Opens the connection pool. Called once during startup; the pool is never
/// closed explicitly and lives until the process exits.
#[instrument(skip(config), fields(db.max_connections = config.max_connections))]
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    info!("Database connection pool established");
    Ok(pool)
}

/// Applies the SQL migrations in `migrations/` at the workspace root.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}

/// Round-trips a trivial query to confirm the database is reachable.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Number of documents in a collection.
pub async fn count(pool: &PgPool, collection: Collection) -> Result<i64, sqlx::Error> {
    let sql = format!("SELECT COUNT(*) FROM {}", collection.table());
    sqlx::query_scalar::<_, i64>(&sql).fetch_one(pool).await
}
