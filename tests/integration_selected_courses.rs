mod common;

use axum::http::StatusCode;
use common::{create_test_course, generate_unique_email, send, setup_test_app, token_for};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

async fn select(pool: &PgPool, email: &str, course_id: Uuid) -> String {
    let (status, body) = send(
        setup_test_app(pool.clone()),
        "POST",
        "/selected-courses",
        Some(&token_for(email)),
        Some(json!({
            "email": email,
            "course_id": course_id,
            "name": "Embroidery",
            "instructor_name": "Grace",
            "price": 15.5
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["insertedId"].as_str().unwrap().to_string()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_select_and_list(pool: PgPool) {
    let email = generate_unique_email();
    let course_id = create_test_course(&pool, "Embroidery", 10).await;
    select(&pool, &email, course_id).await;

    let (status, body) = send(
        setup_test_app(pool),
        "GET",
        &format!("/selected-courses?email={}", email),
        Some(&token_for(&email)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["course_id"], course_id.to_string());
    assert_eq!(entries[0]["price"], 15.5);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_without_email_is_empty(pool: PgPool) {
    let email = generate_unique_email();
    let course_id = create_test_course(&pool, "Embroidery", 10).await;
    select(&pool, &email, course_id).await;

    let (status, body) = send(
        setup_test_app(pool),
        "GET",
        "/selected-courses",
        Some(&token_for(&email)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_other_email_is_forbidden(pool: PgPool) {
    let (status, body) = send(
        setup_test_app(pool),
        "GET",
        "/selected-courses?email=victim@test.com",
        Some(&token_for(&generate_unique_email())),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "forbidden access!");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_select_for_other_email_is_forbidden(pool: PgPool) {
    let course_id = create_test_course(&pool, "Embroidery", 10).await;

    let (status, _) = send(
        setup_test_app(pool),
        "POST",
        "/selected-courses",
        Some(&token_for(&generate_unique_email())),
        Some(json!({
            "email": "victim@test.com",
            "course_id": course_id,
            "name": "Embroidery",
            "price": 15.5
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_only_own_entries(pool: PgPool) {
    let owner = generate_unique_email();
    let course_id = create_test_course(&pool, "Embroidery", 10).await;
    let entry_id = select(&pool, &owner, course_id).await;
    let uri = format!("/selected-courses/{}", entry_id);

    let (status, body) = send(
        setup_test_app(pool.clone()),
        "DELETE",
        &uri,
        Some(&token_for(&generate_unique_email())),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedCount"], 0);

    let (_, body) = send(setup_test_app(pool), "DELETE", &uri, Some(&token_for(&owner)), None).await;
    assert_eq!(body["deletedCount"], 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_select_unknown_course_is_unprocessable(pool: PgPool) {
    let email = generate_unique_email();

    let (status, body) = send(
        setup_test_app(pool.clone()),
        "POST",
        "/selected-courses",
        Some(&token_for(&email)),
        Some(json!({
            "email": email,
            "course_id": Uuid::new_v4(),
            "name": "Embroidery",
            "price": 15.5
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "course does not exist");

    let (_, body) = send(
        setup_test_app(pool),
        "GET",
        &format!("/selected-courses?email={}", email),
        Some(&token_for(&email)),
        None,
    )
    .await;
    assert_eq!(body, json!([]));
}
