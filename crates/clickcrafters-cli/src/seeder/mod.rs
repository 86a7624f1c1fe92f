//! Database seeding with fake data for development and testing.

pub mod courses;
pub mod models;
pub mod users;

use clickcrafters_db::{Collection, PgPool};
use clickcrafters_models::users::UserRole;
use std::time::Instant;

pub use models::SeedConfig;

/// Rows per multi-row `INSERT`, keeping every statement well under the
/// Postgres limit of 65535 bind parameters.
pub const BATCH_SIZE: usize = 800;

/// Totals inserted by [`seed_all`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub students: u64,
    pub instructors: u64,
    pub courses: u64,
    pub pending_classes: u64,
}

pub async fn seed_all(db: &PgPool, config: SeedConfig) -> Result<SeedReport, sqlx::Error> {
    let start_time = Instant::now();

    let students = users::seed_students(db, config.students).await?;
    let instructors = users::seed_instructors(db, config.instructors).await?;
    let courses =
        courses::seed_courses(db, &instructors, config.courses_per_instructor).await?;
    let pending_classes =
        courses::seed_pending_classes(db, &instructors, config.pending_per_instructor).await?;

    println!("Seeding finished in {:?}", start_time.elapsed());

    Ok(SeedReport {
        students,
        instructors: instructors.len() as u64,
        courses,
        pending_classes,
    })
}

/// Deletes everything except admin accounts.
pub async fn clear_seed(db: &PgPool) -> Result<u64, sqlx::Error> {
    let mut tx = db.begin().await?;
    let mut deleted = 0;

    for collection in [
        Collection::Payments,
        Collection::SelectedCourses,
        Collection::PendingClasses,
        Collection::Courses,
        Collection::Instructors,
    ] {
        let sql = format!("DELETE FROM {}", collection.table());
        let rows = sqlx::query(&sql).execute(&mut *tx).await?.rows_affected();
        println!("   Deleted {rows} rows from {collection}");
        deleted += rows;
    }

    let rows = sqlx::query("DELETE FROM users WHERE role <> $1")
        .bind(UserRole::Admin)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    println!("   Deleted {rows} rows from {}", Collection::Users);
    deleted += rows;

    tx.commit().await?;
    Ok(deleted)
}

/// Row count of every collection, in declaration order.
pub async fn collection_counts(db: &PgPool) -> Result<Vec<(Collection, i64)>, sqlx::Error> {
    let mut counts = Vec::with_capacity(Collection::ALL.len());
    for collection in Collection::ALL {
        counts.push((collection, clickcrafters_db::count(db, collection).await?));
    }
    Ok(counts)
}
