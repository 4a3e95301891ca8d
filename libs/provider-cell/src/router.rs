use std::sync::Arc;

use axum::{routing::get, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn provider_routes(state: Arc<AppConfig>) -> Router {
    // The catalog is public, no authentication required
    Router::new()
        .route("/search", get(handlers::search_providers))
        .route("/specialities", get(handlers::list_specialities))
        .route("/{provider_id}", get(handlers::get_provider))
        .route("/{provider_id}/slots", get(handlers::get_provider_slots))
        .with_state(state)
}
