use std::sync::Arc;

use axum::{routing::post, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn recommendation_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", post(handlers::recommend_specialists))
        .with_state(state)
}
