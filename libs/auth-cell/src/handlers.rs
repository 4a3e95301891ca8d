use std::sync::Arc;

use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
};
use serde_json::{json, Value};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::auth::{SessionResponse, User};
use shared_models::error::AppError;

use crate::models::{LoginRequest, RegisterRequest};
use crate::services::registry::UserRegistryService;

/// Register a phone number and log the new user in.
#[axum::debug_handler]
pub async fn register(
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let service = UserRegistryService::new(&config);

    let user = service.register(request).await?;
    let session = service.issue_session(&user.phone_number)?;

    Ok((StatusCode::CREATED, Json(session)))
}

#[axum::debug_handler]
pub async fn login(
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let service = UserRegistryService::new(&config);

    let user = service.login(request).await?;
    let session = service.issue_session(&user.phone_number)?;

    Ok(Json(session))
}

#[axum::debug_handler]
pub async fn logout(
    State(config): State<Arc<AppConfig>>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    debug!("Logging out user: {}", user.phone_number);

    UserRegistryService::new(&config)
        .revoke_session(&user.session_id, user.expires_at)
        .await?;

    Ok(Json(json!({ "success": true })))
}

#[axum::debug_handler]
pub async fn get_session(
    State(config): State<Arc<AppConfig>>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    let registered = UserRegistryService::new(&config)
        .find_user(&user.phone_number)
        .await?;

    Ok(Json(json!({
        "phoneNumber": user.phone_number,
        "fullName": registered.and_then(|u| u.full_name),
        "expiresAt": user.expires_at,
    })))
}
