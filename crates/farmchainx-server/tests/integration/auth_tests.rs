use axum::http::StatusCode;

use crate::integration::common::{register, send, setup_test_app};

#[tokio::test]
async fn health_returns_200() {
    let app = setup_test_app().await;

    let (status, json) = send(&app.router, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["database"], "ok");
}

#[tokio::test]
async fn register_farmer_assigns_code_and_token() {
    let app = setup_test_app().await;

    let auth = register(&app.router, "ana@example.com", "FARMER").await;
    assert_eq!(auth["email"], "ana@example.com");
    assert_eq!(auth["role"], "FARMER");
    assert!(auth["token"].as_str().is_some_and(|t| !t.is_empty()));

    let code = auth["farmer_code"].as_str().unwrap();
    assert_eq!(code.len(), 3);
    assert!(code.chars().all(|c| c.is_ascii_digit()));
    assert!(auth["distributor_code"].is_null());
}

#[tokio::test]
async fn register_distributor_assigns_distributor_code() {
    let app = setup_test_app().await;

    let auth = register(&app.router, "dist@example.com", "DISTRIBUTOR").await;
    assert!(auth["farmer_code"].is_null());
    assert_eq!(auth["distributor_code"].as_str().unwrap().len(), 3);
}

#[tokio::test]
async fn register_duplicate_email_returns_400() {
    let app = setup_test_app().await;

    register(&app.router, "dup@example.com", "CONSUMER").await;

    let (status, json) = send(
        &app.router,
        "POST",
        "/auth/register",
        None,
        Some(serde_json::json!({
            "email": "dup@example.com",
            "password": "hunter2",
            "role": "RETAILER",
            "name": "Other"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn register_unknown_role_returns_400() {
    let app = setup_test_app().await;

    let (status, json) = send(
        &app.router,
        "POST",
        "/auth/register",
        None,
        Some(serde_json::json!({
            "email": "who@example.com",
            "password": "hunter2",
            "role": "WHOLESALER",
            "name": "Who"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn login_round_trip() {
    let app = setup_test_app().await;

    register(&app.router, "ana@example.com", "FARMER").await;

    let (status, json) = send(
        &app.router,
        "POST",
        "/auth/login",
        None,
        Some(serde_json::json!({
            "email": "ana@example.com",
            "password": "hunter2"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["email"], "ana@example.com");
    assert!(json["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn login_bad_password_returns_400() {
    let app = setup_test_app().await;

    register(&app.router, "ana@example.com", "FARMER").await;

    let (status, json) = send(
        &app.router,
        "POST",
        "/auth/login",
        None,
        Some(serde_json::json!({
            "email": "ana@example.com",
            "password": "wrong"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_credentials");
}

#[tokio::test]
async fn login_unknown_email_returns_400() {
    let app = setup_test_app().await;

    let (status, json) = send(
        &app.router,
        "POST",
        "/auth/login",
        None,
        Some(serde_json::json!({
            "email": "nobody@example.com",
            "password": "hunter2"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_credentials");
}

#[tokio::test]
async fn protected_route_without_token_returns_401() {
    let app = setup_test_app().await;

    let (status, json) = send(&app.router, "GET", "/farmer/crops", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "unauthorized");
}

#[tokio::test]
async fn garbage_token_returns_401() {
    let app = setup_test_app().await;

    let (status, _) = send(
        &app.router,
        "GET",
        "/farmer/crops",
        Some("not-a-jwt"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
