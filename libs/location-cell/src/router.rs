use std::sync::Arc;

use axum::{routing::get, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn location_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/pincode/{code}", get(handlers::lookup_pincode))
        .route("/reverse", get(handlers::reverse_geocode))
        .with_state(state)
}
