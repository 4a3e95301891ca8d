use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use auth_cell::router::auth_routes;
use shared_config::AppConfig;
use shared_utils::test_utils::{JwtTestUtils, TestConfig, TestUser};

fn create_test_app(config: AppConfig) -> Router {
    auth_routes(Arc::new(config))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn authed(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_register_returns_session() {
    let test_config = TestConfig::default();
    let app = create_test_app(test_config.to_app_config());

    let (status, body) = send(
        &app,
        post_json("/register", json!({ "fullName": "Asha Rao", "phoneNumber": "+919876543210" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["phoneNumber"], "+919876543210");
    assert!(body["token"].as_str().unwrap().split('.').count() == 3);
}

#[tokio::test]
async fn test_register_rejects_invalid_phone() {
    let test_config = TestConfig::default();
    let config = test_config.to_app_config();
    let app = create_test_app(config.clone());

    let (status, body) = send(
        &app,
        post_json("/register", json!({ "fullName": "Asha Rao", "phoneNumber": "9876543210" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Please enter a valid Indian mobile number with +91 prefix (e.g., +919876543210)."
    );
    assert!(!config.storage_path.exists());
}

#[tokio::test]
async fn test_register_rejects_blank_name() {
    let test_config = TestConfig::default();
    let app = create_test_app(test_config.to_app_config());

    let (status, body) = send(
        &app,
        post_json("/register", json!({ "fullName": "  ", "phoneNumber": "+919876543210" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please enter your full name.");
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let test_config = TestConfig::default();
    let app = create_test_app(test_config.to_app_config());
    let payload = json!({ "fullName": "Asha Rao", "phoneNumber": "+919876543210" });

    let (first, _) = send(&app, post_json("/register", payload.clone())).await;
    let (second, body) = send(&app, post_json("/register", payload)).await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(body["error"], "This phone number is already registered. Please login.");
}

#[tokio::test]
async fn test_login_requires_registration() {
    let test_config = TestConfig::default();
    let app = create_test_app(test_config.to_app_config());

    let (status, body) = send(&app, post_json("/login", json!({ "phoneNumber": "+919876543210" }))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not registered. Please register first.");
}

#[tokio::test]
async fn test_login_after_register() {
    let test_config = TestConfig::default();
    let app = create_test_app(test_config.to_app_config());

    send(
        &app,
        post_json("/register", json!({ "fullName": "Asha Rao", "phoneNumber": "+919876543210" })),
    )
    .await;
    let (status, body) = send(&app, post_json("/login", json!({ "phoneNumber": "+919876543210" }))).await;

    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap();

    let (status, session) = send(&app, authed("GET", "/session", token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["phoneNumber"], "+919876543210");
    assert_eq!(session["fullName"], "Asha Rao");
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let test_config = TestConfig::default();
    let app = create_test_app(test_config.to_app_config());

    let (_, body) = send(
        &app,
        post_json("/register", json!({ "fullName": "Asha Rao", "phoneNumber": "+919876543210" })),
    )
    .await;
    let token = body["token"].as_str().unwrap().to_string();

    let (status, _) = send(&app, authed("POST", "/logout", &token)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, authed("GET", "/session", &token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Session has been logged out");
}

#[tokio::test]
async fn test_session_rejects_bad_tokens() {
    let test_config = TestConfig::default();
    let app = create_test_app(test_config.to_app_config());
    let user = TestUser::default();

    let expired = JwtTestUtils::create_expired_token(&user, &test_config.session_secret);
    let forged = JwtTestUtils::create_invalid_signature_token(&user);

    for token in [expired, forged, JwtTestUtils::create_malformed_token()] {
        let (status, _) = send(&app, authed("GET", "/session", &token)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    let missing = Request::builder().uri("/session").body(Body::empty()).unwrap();
    let (status, body) = send(&app, missing).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Missing authorization header");
}
