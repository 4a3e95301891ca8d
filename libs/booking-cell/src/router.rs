use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers;

pub fn booking_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", post(handlers::create_booking).get(handlers::list_bookings))
        .route("/reschedule-slots", get(handlers::reschedule_slots))
        .route("/{booking_id}", get(handlers::get_booking))
        .route("/{booking_id}/cancel", post(handlers::cancel_booking))
        .route("/{booking_id}/reschedule", patch(handlers::reschedule_booking))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
        .with_state(state)
}
