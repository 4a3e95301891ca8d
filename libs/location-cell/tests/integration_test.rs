use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use location_cell::router::location_routes;
use shared_utils::test_utils::TestConfig;

fn config_for(server: &MockServer) -> TestConfig {
    TestConfig {
        nominatim_base_url: server.uri(),
        ..TestConfig::default()
    }
}

async fn get(test_config: &TestConfig, uri: &str) -> (StatusCode, Value) {
    let app: Router = location_routes(Arc::new(test_config.to_app_config()));
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

#[tokio::test]
async fn test_pincode_resolves_to_city_and_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("postalcode", "400058"))
        .and(query_param("country", "India"))
        .and(query_param("addressdetails", "1"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "display_name": "Andheri West, Mumbai, Maharashtra, 400058, India",
                "address": { "suburb": "Andheri West", "city": "Mumbai", "state": "Maharashtra", "country": "India" }
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let test_config = config_for(&server);
    let (status, body) = get(&test_config, "/pincode/400058").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "Mumbai, Maharashtra");
}

#[tokio::test]
async fn test_unknown_pincode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let test_config = config_for(&server);
    let (status, body) = get(&test_config, "/pincode/999999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No address found for this pincode.");
}

#[tokio::test]
async fn test_pincode_without_concise_address() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "address": { "road": "MG Road" } }])))
        .mount(&server)
        .await;

    let test_config = config_for(&server);
    let (status, body) = get(&test_config, "/pincode/560001").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No concise address found for this pincode.");
}

#[tokio::test]
async fn test_pincode_upstream_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let test_config = config_for(&server);
    let (status, body) = get(&test_config, "/pincode/110075").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Could not fetch address for this pincode.");
}

#[tokio::test]
async fn test_invalid_pincode_is_not_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let test_config = config_for(&server);
    let (status, _) = get(&test_config, "/pincode/40005800123").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reverse_geocode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("lat", "26.9124"))
        .and(query_param("lon", "75.7873"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "address": { "city": "Jaipur", "state": "Rajasthan", "country": "India" }
        })))
        .mount(&server)
        .await;

    let test_config = config_for(&server);
    let (status, body) = get(&test_config, "/reverse?lat=26.9124&lon=75.7873").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "Jaipur, Rajasthan");
}

#[tokio::test]
async fn test_reverse_geocode_in_open_sea() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "Unable to geocode" })))
        .mount(&server)
        .await;

    let test_config = config_for(&server);
    let (status, body) = get(&test_config, "/reverse?lat=10.0&lon=65.0").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Could not extract a concise address. Please enter it manually.");
}

#[tokio::test]
async fn test_reverse_geocode_unreachable() {
    let test_config = TestConfig::default();
    let (status, body) = get(&test_config, "/reverse?lat=19.07&lon=72.87").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Could not fetch address. Please enter it manually.");
}

#[tokio::test]
async fn test_reverse_rejects_out_of_range_coordinates() {
    let test_config = TestConfig::default();
    let (status, body) = get(&test_config, "/reverse?lat=91&lon=0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid coordinates.");
}
