use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};

use shared_config::AppConfig;
use shared_database::{keys, LocalStore};
use shared_models::auth::RevokedSession;
use shared_models::error::AppError;

use crate::jwt::validate_token;

pub fn extract_bearer_token(headers: &HeaderMap) -> Result<String, AppError> {
    let auth_header = headers
        .get("Authorization")
        .ok_or_else(|| AppError::Auth("Missing authorization header".to_string()))?;

    let auth_value = auth_header
        .to_str()
        .map_err(|_| AppError::Auth("Invalid authorization header format".to_string()))?;

    match auth_value.strip_prefix("Bearer ") {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(AppError::Auth("Invalid authorization header format".to_string())),
    }
}

/// Whether the session id has been revoked by a logout.
pub async fn is_session_revoked(store: &LocalStore, session_id: &str) -> Result<bool, AppError> {
    let revoked: Vec<RevokedSession> = store
        .get_json(keys::REVOKED_SESSIONS)
        .await?
        .unwrap_or_default();
    Ok(revoked.iter().any(|entry| entry.jti == session_id))
}

pub async fn auth_middleware(
    State(config): State<Arc<AppConfig>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(request.headers())?;

    let user = validate_token(&token, &config.session_secret).map_err(AppError::Auth)?;

    let store = LocalStore::new(&config);
    if is_session_revoked(&store, &user.session_id).await? {
        return Err(AppError::Auth("Session has been logged out".to_string()));
    }

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
