use std::sync::Arc;

use axum::{
    extract::{Extension, Json, Path, State},
    http::StatusCode,
};
use serde_json::{json, Value};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::auth::User;
use shared_models::error::AppError;

use crate::models::{
    Booking, CancelBookingRequest, CreateBookingRequest, RescheduleBookingRequest,
    RESCHEDULE_SLOTS,
};
use crate::services::booking::BookingService;

#[axum::debug_handler]
pub async fn create_booking(
    State(config): State<Arc<AppConfig>>,
    Extension(user): Extension<User>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let booking = BookingService::new(&config)
        .create_booking(&user.phone_number, request)
        .await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

#[axum::debug_handler]
pub async fn list_bookings(
    State(config): State<Arc<AppConfig>>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    let bookings = BookingService::new(&config)
        .list_bookings(&user.phone_number)
        .await?;

    Ok(Json(json!({ "bookings": bookings })))
}

pub async fn reschedule_slots() -> Json<Value> {
    Json(json!({ "slots": RESCHEDULE_SLOTS }))
}

#[axum::debug_handler]
pub async fn get_booking(
    State(config): State<Arc<AppConfig>>,
    Extension(user): Extension<User>,
    Path(booking_id): Path<String>,
) -> Result<Json<Booking>, AppError> {
    let booking = BookingService::new(&config)
        .get_booking(&user.phone_number, &booking_id)
        .await?;

    Ok(Json(booking))
}

#[axum::debug_handler]
pub async fn cancel_booking(
    State(config): State<Arc<AppConfig>>,
    Extension(user): Extension<User>,
    Path(booking_id): Path<String>,
    request: Option<Json<CancelBookingRequest>>,
) -> Result<Json<Booking>, AppError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    debug!("Cancel requested for booking {} by {}", booking_id, user.phone_number);

    let booking = BookingService::new(&config)
        .cancel_booking(&user.phone_number, &booking_id, request.reason)
        .await?;

    Ok(Json(booking))
}

#[axum::debug_handler]
pub async fn reschedule_booking(
    State(config): State<Arc<AppConfig>>,
    Extension(user): Extension<User>,
    Path(booking_id): Path<String>,
    Json(request): Json<RescheduleBookingRequest>,
) -> Result<Json<Booking>, AppError> {
    debug!("Reschedule requested for booking {} by {}", booking_id, user.phone_number);

    let booking = BookingService::new(&config)
        .reschedule_booking(&user.phone_number, &booking_id, request)
        .await?;

    Ok(Json(booking))
}
