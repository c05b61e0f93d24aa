//! Integration tests for the auth endpoints over the in-memory backend.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

const EMAIL: &str = "sidorov@docsystem.ru";
const PASSWORD: &str = "correct-horse";

#[tokio::test]
async fn test_register_verify_login_flow() {
    let app = TestApp::new();

    let session = app.signed_in(EMAIL, PASSWORD).await;

    assert_eq!(session["user"]["email"], EMAIL);
    assert_eq!(session["user"]["email_verified"], true);
    assert!(session["access_token"].as_str().is_some());
    assert!(session["refresh_token"].as_str().is_some());
}

#[tokio::test]
async fn test_login_before_verification_is_refused() {
    let app = TestApp::new();
    app.post(
        "/api/auth/register",
        json!({ "email": EMAIL, "password": PASSWORD }),
    )
    .await;

    let response = app
        .post(
            "/api/auth/login",
            json!({ "email": EMAIL, "password": PASSWORD }),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Подтвердите email перед входом");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();
    app.signed_in(EMAIL, PASSWORD).await;

    let response = app
        .post(
            "/api/auth/login",
            json!({ "email": EMAIL, "password": "wrong-password" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let app = TestApp::new();
    app.signed_in(EMAIL, PASSWORD).await;

    let response = app
        .post(
            "/api/auth/register",
            json!({ "email": EMAIL, "password": PASSWORD }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_short_password_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post(
            "/api/auth/register",
            json!({ "email": EMAIL, "password": "short" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Пароль должен содержать не менее 8 символов"
    );
}

#[tokio::test]
async fn test_register_invalid_email_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post(
            "/api/auth/register",
            json!({ "email": "not-an-email", "password": PASSWORD }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post("/api/auth/login", json!({ "email": EMAIL }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_refresh_rotates_and_logout_revokes() {
    let app = TestApp::new();
    let session = app.signed_in(EMAIL, PASSWORD).await;
    let first = session["refresh_token"].as_str().unwrap().to_string();

    let refreshed = app
        .post("/api/auth/refresh", json!({ "refresh_token": first }))
        .await;
    assert_eq!(refreshed.status, StatusCode::OK);
    let second = refreshed.body["data"]["refresh_token"]
        .as_str()
        .unwrap()
        .to_string();
    assert_ne!(first, second);

    let reused = app
        .post("/api/auth/refresh", json!({ "refresh_token": first }))
        .await;
    assert_eq!(reused.status, StatusCode::UNAUTHORIZED);

    let logout = app
        .post("/api/auth/logout", json!({ "refresh_token": second }))
        .await;
    assert_eq!(logout.status, StatusCode::OK);
    assert_eq!(app.auth.active_sessions().await, 0);
}

#[tokio::test]
async fn test_password_reset_flow() {
    let app = TestApp::new();
    app.signed_in(EMAIL, PASSWORD).await;

    let request = app
        .post("/api/auth/reset-password", json!({ "email": EMAIL }))
        .await;
    assert_eq!(request.status, StatusCode::OK);

    let code = app.auth.reset_code(EMAIL).await.unwrap();
    let confirm = app
        .post(
            "/api/auth/reset-password",
            json!({ "email": EMAIL, "code": code, "new_password": "brand-new-secret" }),
        )
        .await;
    assert_eq!(confirm.status, StatusCode::OK);
    assert_eq!(app.auth.active_sessions().await, 0);

    let old = app
        .post(
            "/api/auth/login",
            json!({ "email": EMAIL, "password": PASSWORD }),
        )
        .await;
    assert_eq!(old.status, StatusCode::UNAUTHORIZED);

    let new = app
        .post(
            "/api/auth/login",
            json!({ "email": EMAIL, "password": "brand-new-secret" }),
        )
        .await;
    assert_eq!(new.status, StatusCode::OK);
}

#[tokio::test]
async fn test_reset_code_without_password_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post(
            "/api/auth/reset-password",
            json!({ "email": EMAIL, "code": "123456" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
