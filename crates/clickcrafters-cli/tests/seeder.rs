use clickcrafters_cli::seeder::models::UserSeed;
use clickcrafters_cli::seeder::users::{
    generate_users, insert_instructors, insert_users, seed_instructors, seed_students,
};
use clickcrafters_cli::seeder::{BATCH_SIZE, courses};
use clickcrafters_db::{Collection, count};
use clickcrafters_models::users::UserRole;
use sqlx::PgPool;

fn user_seed(email: &str, role: UserRole) -> UserSeed {
    UserSeed {
        name: "Grace".to_string(),
        email: email.to_string(),
        photo_url: None,
        role,
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_seed_students_beyond_bind_parameter_limit(pool: PgPool) {
    // 4 params per user, 88000 binds in total
    let inserted = seed_students(&pool, 22_000).await.unwrap();

    assert_eq!(inserted, 22_000);
    assert_eq!(count(&pool, Collection::Users).await.unwrap(), 22_000);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_courses_inserted_across_batches(pool: PgPool) {
    let instructors = seed_instructors(&pool, 3).await.unwrap();
    let per_instructor = BATCH_SIZE / 2 + 1;

    let inserted = courses::seed_courses(&pool, &instructors, per_instructor)
        .await
        .unwrap();

    assert_eq!(inserted as usize, 3 * per_instructor);
    assert_eq!(
        count(&pool, Collection::Courses).await.unwrap() as usize,
        3 * per_instructor
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_insert_users_returns_only_new_emails(pool: PgPool) {
    let existing = generate_users(2, UserRole::Student);
    insert_users(&pool, &existing).await.unwrap();

    let mut again = existing;
    again.push(user_seed("grace.fresh@example.com", UserRole::Student));

    let inserted = insert_users(&pool, &again).await.unwrap();
    assert_eq!(inserted, vec!["grace.fresh@example.com".to_string()]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_insert_instructors_drops_taken_emails(pool: PgPool) {
    insert_users(&pool, &[user_seed("taken@example.com", UserRole::Student)])
        .await
        .unwrap();

    let instructors = insert_instructors(
        &pool,
        vec![
            user_seed("taken@example.com", UserRole::Instructor),
            user_seed("free@example.com", UserRole::Instructor),
        ],
    )
    .await
    .unwrap();

    let emails: Vec<&str> = instructors.iter().map(|i| i.email.as_str()).collect();
    assert_eq!(emails, vec!["free@example.com"]);
    assert_eq!(count(&pool, Collection::Instructors).await.unwrap(), 1);

    let courses = courses::seed_courses(&pool, &instructors, 2).await.unwrap();
    assert_eq!(courses, 2);
}
