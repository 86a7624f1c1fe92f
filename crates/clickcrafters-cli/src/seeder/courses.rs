//! Course and pending submission seeding.

use clickcrafters_db::Collection;
use fake::Fake;
use fake::faker::lorem::en::Words;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::time::Instant;

use super::BATCH_SIZE;
use super::models::{CourseSeed, UserSeed};

const CRAFTS: [&str; 8] = [
    "Origami",
    "Pottery",
    "Knitting",
    "Woodcarving",
    "Calligraphy",
    "Embroidery",
    "Candle Making",
    "Paper Quilling",
];

pub fn generate_courses(instructors: &[UserSeed], per_instructor: usize) -> Vec<CourseSeed> {
    instructors
        .iter()
        .flat_map(|instructor| {
            (0..per_instructor).map(move |_| {
                let craft = CRAFTS[(0..CRAFTS.len()).fake::<usize>()];
                let words: Vec<String> = Words(1..3).fake();
                let cents: i64 = (999..19999).fake();

                CourseSeed {
                    name: format!("{craft}: {}", words.join(" ")),
                    image: Some(format!(
                        "https://picsum.photos/seed/{}/640/360",
                        craft.replace(' ', "-").to_lowercase()
                    )),
                    instructor_name: instructor.name.clone(),
                    instructor_email: instructor.email.clone(),
                    price: cents as f64 / 100.0,
                    available_seat: (5..40).fake(),
                }
            })
        })
        .collect()
}

/// Inserts course-shaped rows into `table` in batches inside one transaction.
async fn insert_course_rows(
    db: &PgPool,
    table: &str,
    rows: &[CourseSeed],
) -> Result<u64, sqlx::Error> {
    let mut tx = db.begin().await?;
    let mut inserted = 0;

    // 6 params per row
    for chunk in rows.chunks(BATCH_SIZE) {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "INSERT INTO {table} (name, image, instructor_name, instructor_email, price, available_seat) "
        ));
        builder.push_values(chunk, |mut row, course| {
            row.push_bind(&course.name)
                .push_bind(&course.image)
                .push_bind(&course.instructor_name)
                .push_bind(&course.instructor_email)
                .push_bind(course.price)
                .push_bind(course.available_seat);
        });

        inserted += builder.build().execute(&mut *tx).await?.rows_affected();
    }

    tx.commit().await?;
    Ok(inserted)
}

pub async fn insert_courses(db: &PgPool, courses: &[CourseSeed]) -> Result<u64, sqlx::Error> {
    insert_course_rows(db, Collection::Courses.table(), courses).await
}

/// Pending rows take the default status.
pub async fn insert_pending_classes(
    db: &PgPool,
    classes: &[CourseSeed],
) -> Result<u64, sqlx::Error> {
    insert_course_rows(db, Collection::PendingClasses.table(), classes).await
}

pub async fn seed_courses(
    db: &PgPool,
    instructors: &[UserSeed],
    per_instructor: usize,
) -> Result<u64, sqlx::Error> {
    let start_time = Instant::now();
    let courses = generate_courses(instructors, per_instructor);
    println!("Seeding {} courses...", courses.len());

    let inserted = insert_courses(db, &courses).await?;

    println!("   Inserted {inserted} courses in {:?}", start_time.elapsed());
    Ok(inserted)
}

pub async fn seed_pending_classes(
    db: &PgPool,
    instructors: &[UserSeed],
    per_instructor: usize,
) -> Result<u64, sqlx::Error> {
    let start_time = Instant::now();
    let classes = generate_courses(instructors, per_instructor);
    println!("Seeding {} pending submissions...", classes.len());

    let inserted = insert_pending_classes(db, &classes).await?;

    println!("   Inserted {inserted} submissions in {:?}", start_time.elapsed());
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeder::users::generate_users;
    use clickcrafters_models::users::UserRole;

    #[test]
    fn test_generate_courses_per_instructor() {
        let instructors = generate_users(3, UserRole::Instructor);
        let courses = generate_courses(&instructors, 4);

        assert_eq!(courses.len(), 12);
        for course in &courses {
            assert!(course.price >= 9.99 && course.price < 200.0);
            assert!((5..40).contains(&course.available_seat));
            assert!(instructors.iter().any(|i| i.email == course.instructor_email));
        }
    }
}
