use std::sync::Arc;

use axum::{routing::get, Router};

use auth_cell::router::auth_routes;
use booking_cell::router::booking_routes;
use location_cell::router::location_routes;
use provider_cell::router::provider_routes;
use recommendation_cell::router::recommendation_routes;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "Hello Doctor API is running!" }))
        .nest("/auth", auth_routes(state.clone()))
        .nest("/providers", provider_routes(state.clone()))
        .nest("/bookings", booking_routes(state.clone()))
        .nest("/recommendations", recommendation_routes(state.clone()))
        .nest("/location", location_routes(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use shared_utils::test_utils::TestConfig;

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn health_check() {
        let test_config = TestConfig::default();
        let app = create_router(test_config.to_arc());

        let (status, body) = send(&app, Request::builder().uri("/").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"Hello Doctor API is running!");
    }

    #[tokio::test]
    async fn register_then_book_through_nested_routes() {
        let test_config = TestConfig::default();
        let app = create_router(test_config.to_arc());

        let register = Request::builder()
            .method("POST")
            .uri("/auth/register")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({ "fullName": "Asha Rao", "phoneNumber": "+919876543210" }).to_string(),
            ))
            .unwrap();
        let (status, body) = send(&app, register).await;
        assert_eq!(status, StatusCode::CREATED);
        let session: Value = serde_json::from_slice(&body).unwrap();
        let token = session["token"].as_str().unwrap().to_string();

        let (status, body) = send(
            &app,
            Request::builder().uri("/providers/search?speciality=cardio").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let search: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(search["total"], 1);

        let (status, body) = send(
            &app,
            Request::builder()
                .uri("/bookings")
                .header("authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let bookings: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(bookings["bookings"], json!([]));

        let logout = Request::builder()
            .method("POST")
            .uri("/auth/logout")
            .header("authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, logout).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(
            &app,
            Request::builder()
                .uri("/bookings")
                .header("authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
