//! Student and instructor seeding.
//!
//! Each seeded instructor gets both a user row with the `instructor` role
//! and a public profile, so the role guards and the instructors page agree.

use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use std::collections::HashSet;
use std::time::Instant;

use clickcrafters_models::users::UserRole;

use super::BATCH_SIZE;
use super::models::{InstructorSeed, UserSeed};

/// Makes an email unique within a run without losing the fake address' look.
fn unique_email(index: usize, role: UserRole) -> String {
    let email: String = SafeEmail().fake();
    match email.split_once('@') {
        Some((local, domain)) => format!("{local}.{role}{index}@{domain}"),
        None => format!("{role}{index}@example.com"),
    }
}

pub fn generate_users(count: usize, role: UserRole) -> Vec<UserSeed> {
    (0..count)
        .map(|i| UserSeed {
            name: Name().fake(),
            email: unique_email(i, role),
            photo_url: Some(format!("https://i.pravatar.cc/150?u={role}{i}")),
            role,
        })
        .collect()
}

pub fn generate_instructor_profiles(users: &[UserSeed]) -> Vec<InstructorSeed> {
    users
        .iter()
        .map(|user| InstructorSeed {
            name: user.name.clone(),
            email: user.email.clone(),
            image: user.photo_url.clone(),
            classes_taken: (0..40).fake(),
            bio: Some(Sentence(6..14).fake()),
        })
        .collect()
}

/// Inserts users in batches, skipping emails that already exist.
/// Returns the emails that were actually inserted.
pub async fn insert_users(db: &PgPool, users: &[UserSeed]) -> Result<Vec<String>, sqlx::Error> {
    let mut tx = db.begin().await?;
    let inserted = insert_users_tx(&mut tx, users).await?;
    tx.commit().await?;
    Ok(inserted)
}

async fn insert_users_tx(
    tx: &mut Transaction<'_, Postgres>,
    users: &[UserSeed],
) -> Result<Vec<String>, sqlx::Error> {
    let mut inserted = Vec::with_capacity(users.len());

    for chunk in users.chunks(BATCH_SIZE) {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO users (name, email, photo_url, role) ");
        builder.push_values(chunk, |mut row, user| {
            row.push_bind(&user.name)
                .push_bind(&user.email)
                .push_bind(&user.photo_url)
                .push_bind(user.role);
        });
        builder.push(" ON CONFLICT (email) DO NOTHING RETURNING email");

        let emails: Vec<String> = builder
            .build_query_scalar()
            .fetch_all(&mut **tx)
            .await?;
        inserted.extend(emails);
    }

    Ok(inserted)
}

async fn insert_instructor_profiles_tx(
    tx: &mut Transaction<'_, Postgres>,
    profiles: &[InstructorSeed],
) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;

    // 5 params per profile
    for chunk in profiles.chunks(BATCH_SIZE) {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO instructors (name, email, image, classes_taken, bio) ",
        );
        builder.push_values(chunk, |mut row, profile| {
            row.push_bind(&profile.name)
                .push_bind(&profile.email)
                .push_bind(&profile.image)
                .push_bind(profile.classes_taken)
                .push_bind(&profile.bio);
        });
        builder.push(" ON CONFLICT (email) DO NOTHING");

        inserted += builder.build().execute(&mut **tx).await?.rows_affected();
    }

    Ok(inserted)
}

pub async fn seed_students(db: &PgPool, count: usize) -> Result<u64, sqlx::Error> {
    let start_time = Instant::now();
    println!("Seeding {count} students...");

    let inserted = insert_users(db, &generate_users(count, UserRole::Student)).await?;

    println!(
        "   Inserted {} students in {:?}",
        inserted.len(),
        start_time.elapsed()
    );
    Ok(inserted.len() as u64)
}

/// Inserts instructor users and their profiles.
///
/// Users whose email is already taken are dropped from the result and get no
/// profile.
pub async fn insert_instructors(
    db: &PgPool,
    users: Vec<UserSeed>,
) -> Result<Vec<UserSeed>, sqlx::Error> {
    let mut tx = db.begin().await?;

    let inserted: HashSet<String> = insert_users_tx(&mut tx, &users)
        .await?
        .into_iter()
        .collect();
    let users: Vec<UserSeed> = users
        .into_iter()
        .filter(|user| inserted.contains(&user.email))
        .collect();

    insert_instructor_profiles_tx(&mut tx, &generate_instructor_profiles(&users)).await?;
    tx.commit().await?;

    Ok(users)
}

/// Seeds instructors, returning the ones that were actually inserted.
pub async fn seed_instructors(db: &PgPool, count: usize) -> Result<Vec<UserSeed>, sqlx::Error> {
    let start_time = Instant::now();
    println!("Seeding {count} instructors...");

    let users = insert_instructors(db, generate_users(count, UserRole::Instructor)).await?;

    println!(
        "   Inserted {} instructors in {:?}",
        users.len(),
        start_time.elapsed()
    );
    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_emails_are_unique() {
        let users = generate_users(200, UserRole::Student);
        let emails: HashSet<_> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails.len(), 200);
        assert!(users.iter().all(|u| u.role == UserRole::Student));
    }

    #[test]
    fn test_instructor_profiles_mirror_users() {
        let users = generate_users(3, UserRole::Instructor);
        let profiles = generate_instructor_profiles(&users);
        for (user, profile) in users.iter().zip(&profiles) {
            assert_eq!(user.email, profile.email);
            assert!(profile.classes_taken >= 0);
        }
    }
}
