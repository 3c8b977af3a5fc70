//! HTTP-level integration tests for the `/api/auth` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth, put_json_auth, TEST_PASSWORD};
use serde_json::json;
use sqlx::PgPool;

async fn sign_in(pool: &PgPool, email: &str, password: &str) -> axum::http::Response<axum::body::Body> {
    let body = json!({ "email": email, "password": password });
    post_json(common::build_test_app(pool.clone()), "/api/auth/sign-in", body).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sign_up_defaults_to_student(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({ "email": "ravi@example.com", "password": "secret1", "full_name": "Ravi" });
    let response = post_json(app, "/api/auth/sign-up", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert_eq!(json["expires_in"], 3600);
    assert_eq!(json["user"]["email"], "ravi@example.com");
    assert_eq!(json["user"]["full_name"], "Ravi");
    assert_eq!(json["user"]["role"], "student");
    assert!(json["user"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sign_up_rejects_bad_input(pool: PgPool) {
    let cases = [
        json!({ "email": "not-an-email", "password": "secret1" }),
        json!({ "email": "a@example.com", "password": "123" }),
        json!({ "email": "a@example.com", "password": "secret1", "role": "admin" }),
    ];
    for body in cases {
        let response = post_json(common::build_test_app(pool.clone()), "/api/auth/sign-up", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_conflicts(pool: PgPool) {
    common::student(&pool, "dup@example.com").await;

    let body = json!({ "email": "dup@example.com", "password": "secret1" });
    let response = post_json(common::build_test_app(pool), "/api/auth/sign-up", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert!(json["error"].as_str().unwrap().contains("uq_users_email"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sign_in_success_and_failures(pool: PgPool) {
    let account = common::instructor(&pool, "guru@example.com").await;

    let response = sign_in(&pool, "guru@example.com", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["id"], account.id);
    assert_eq!(json["user"]["role"], "instructor");

    let wrong = sign_in(&pool, "guru@example.com", "wrong-password").await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    let ghost = sign_in(&pool, "ghost@example.com", TEST_PASSWORD).await;
    assert_eq!(ghost.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_refresh_rotates_token(pool: PgPool) {
    common::student(&pool, "s@example.com").await;
    let login = body_json(sign_in(&pool, "s@example.com", TEST_PASSWORD).await).await;
    let refresh_token = login["refresh_token"].as_str().unwrap();

    let body = json!({ "refresh_token": refresh_token });
    let response = post_json(common::build_test_app(pool.clone()), "/api/auth/refresh", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_ne!(json["refresh_token"], login["refresh_token"]);

    // The old token was revoked by rotation.
    let reused = post_json(common::build_test_app(pool), "/api/auth/refresh", body).await;
    assert_eq!(reused.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_refresh_redeems_token_once(pool: PgPool) {
    common::student(&pool, "s@example.com").await;
    let login = body_json(sign_in(&pool, "s@example.com", TEST_PASSWORD).await).await;
    let body = json!({ "refresh_token": login["refresh_token"] });

    let handles: Vec<_> = (0..6)
        .map(|_| {
            let app = common::build_test_app(pool.clone());
            let body = body.clone();
            tokio::spawn(async move { post_json(app, "/api/auth/refresh", body).await.status() })
        })
        .collect();

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }
    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 1);
    assert!(statuses
        .iter()
        .all(|s| *s == StatusCode::OK || *s == StatusCode::UNAUTHORIZED));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sign_out_revokes_refresh_tokens(pool: PgPool) {
    let account = common::student(&pool, "s@example.com").await;
    let login = body_json(sign_in(&pool, "s@example.com", TEST_PASSWORD).await).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/auth/sign-out",
        json!({}),
        &account.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = json!({ "refresh_token": login["refresh_token"] });
    let response = post_json(common::build_test_app(pool), "/api/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_change_password(pool: PgPool) {
    let account = common::student(&pool, "s@example.com").await;

    let short = put_json_auth(
        common::build_test_app(pool.clone()),
        "/api/auth/password",
        json!({ "password": "abc" }),
        &account.token,
    )
    .await;
    assert_eq!(short.status(), StatusCode::BAD_REQUEST);

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        "/api/auth/password",
        json!({ "password": "new-mantra" }),
        &account.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(
        sign_in(&pool, "s@example.com", TEST_PASSWORD).await.status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        sign_in(&pool, "s@example.com", "new-mantra").await.status(),
        StatusCode::OK
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bearer_token_required(pool: PgPool) {
    let missing = common::get(common::build_test_app(pool.clone()), "/api/profile").await;
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

    let garbage = get_auth(common::build_test_app(pool), "/api/profile", "not-a-jwt").await;
    assert_eq!(garbage.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(garbage).await["code"], "UNAUTHORIZED");
}
