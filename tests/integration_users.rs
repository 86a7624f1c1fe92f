mod common;

use axum::http::StatusCode;
use clickcrafters_models::users::UserRole;
use common::{create_test_user, generate_unique_email, send, setup_test_app, token_for};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_user_then_duplicate(pool: PgPool) {
    let email = generate_unique_email();
    let body = json!({ "email": email, "name": "Ada", "photo_url": "https://img/ada.png" });

    let (status, first) = send(setup_test_app(pool.clone()), "POST", "/users", None, Some(body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["acknowledged"], true);
    assert!(first["insertedId"].is_string());

    let (status, second) = send(setup_test_app(pool.clone()), "POST", "/users", None, Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second, json!({ "message": "User is already exist" }));

    let role: UserRole = sqlx::query_scalar("SELECT role FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(role, UserRole::Student);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_user_ignores_client_role(pool: PgPool) {
    let email = generate_unique_email();

    let (status, _) = send(
        setup_test_app(pool.clone()),
        "POST",
        "/users",
        None,
        Some(json!({ "email": email, "name": "Mallory", "role": "admin" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let role: UserRole = sqlx::query_scalar("SELECT role FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(role, UserRole::Student);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_users_requires_admin(pool: PgPool) {
    let student = generate_unique_email();
    create_test_user(&pool, &student, UserRole::Student).await;

    let (status, body) = send(
        setup_test_app(pool.clone()),
        "GET",
        "/users",
        Some(&token_for(&student)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "error": true, "message": "forbidden access!" }));

    let admin = generate_unique_email();
    create_test_user(&pool, &admin, UserRole::Admin).await;

    let (status, body) = send(
        setup_test_app(pool.clone()),
        "GET",
        "/users",
        Some(&token_for(&admin)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unknown_caller_is_forbidden_on_admin_route(pool: PgPool) {
    let (status, _) = send(
        setup_test_app(pool),
        "GET",
        "/users",
        Some(&token_for(&generate_unique_email())),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_make_admin_then_check_admin(pool: PgPool) {
    let admin = generate_unique_email();
    create_test_user(&pool, &admin, UserRole::Admin).await;
    let target = generate_unique_email();
    let target_id = create_test_user(&pool, &target, UserRole::Student).await;

    let (status, body) = send(
        setup_test_app(pool.clone()),
        "GET",
        &format!("/users/admin/{}", target),
        Some(&token_for(&target)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "admin": false }));

    let (status, body) = send(
        setup_test_app(pool.clone()),
        "PATCH",
        &format!("/users/admin/{}", target_id),
        Some(&token_for(&admin)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matchedCount"], 1);
    assert_eq!(body["modifiedCount"], 1);

    let (_, body) = send(
        setup_test_app(pool.clone()),
        "GET",
        &format!("/users/admin/{}", target),
        Some(&token_for(&target)),
        None,
    )
    .await;
    assert_eq!(body, json!({ "admin": true }));

    // promoting again matches but changes nothing
    let (_, body) = send(
        setup_test_app(pool.clone()),
        "PATCH",
        &format!("/users/admin/{}", target_id),
        Some(&token_for(&admin)),
        None,
    )
    .await;
    assert_eq!(body["matchedCount"], 1);
    assert_eq!(body["modifiedCount"], 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_check_admin_for_other_email_is_false(pool: PgPool) {
    let admin = generate_unique_email();
    create_test_user(&pool, &admin, UserRole::Admin).await;
    let caller = generate_unique_email();

    let (status, body) = send(
        setup_test_app(pool),
        "GET",
        &format!("/users/admin/{}", admin),
        Some(&token_for(&caller)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "admin": false }));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_role(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, UserRole::Instructor).await;

    let (status, body) = send(
        setup_test_app(pool.clone()),
        "GET",
        &format!("/users/role/{}", email),
        Some(&token_for(&email)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "role": "instructor" }));

    let (status, _) = send(
        setup_test_app(pool),
        "GET",
        &format!("/users/role/{}", email),
        Some(&token_for(&generate_unique_email())),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_make_instructor_and_delete(pool: PgPool) {
    let admin = generate_unique_email();
    create_test_user(&pool, &admin, UserRole::Admin).await;
    let target = generate_unique_email();
    let target_id = create_test_user(&pool, &target, UserRole::Student).await;
    let token = token_for(&admin);

    let (status, body) = send(
        setup_test_app(pool.clone()),
        "PATCH",
        &format!("/users/instructor/{}", target_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["modifiedCount"], 1);

    let (_, body) = send(
        setup_test_app(pool.clone()),
        "DELETE",
        &format!("/users/delete/{}", target_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(body, json!({ "acknowledged": true, "deletedCount": 1 }));

    // deleting an absent user is not an error
    let (status, body) = send(
        setup_test_app(pool.clone()),
        "DELETE",
        &format!("/users/delete/{}", target_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedCount"], 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_malformed_id_is_bad_request(pool: PgPool) {
    let admin = generate_unique_email();
    create_test_user(&pool, &admin, UserRole::Admin).await;

    let (status, _) = send(
        setup_test_app(pool),
        "DELETE",
        "/users/delete/not-a-uuid",
        Some(&token_for(&admin)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
