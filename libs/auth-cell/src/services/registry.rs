use chrono::{DateTime, Utc};
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_database::{keys, LocalStore};
use shared_models::auth::{RevokedSession, SessionResponse};
use shared_utils::jwt::create_session_token;

use crate::models::{
    validate_full_name, validate_phone_number, AuthError, LoginRequest, RegisterRequest,
    RegisteredUser,
};

pub struct UserRegistryService {
    store: LocalStore,
    session_secret: String,
    session_ttl_hours: i64,
}

impl UserRegistryService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: LocalStore::new(config),
            session_secret: config.session_secret.clone(),
            session_ttl_hours: config.session_ttl_hours,
        }
    }

    /// Add a user to the registered list. Input is validated before the store is touched.
    pub async fn register(&self, request: RegisterRequest) -> Result<RegisteredUser, AuthError> {
        validate_full_name(&request.full_name)?;
        validate_phone_number(&request.phone_number)?;

        let user = RegisteredUser {
            phone_number: request.phone_number,
            full_name: Some(request.full_name.trim().to_string()),
        };

        let registered = self
            .store
            .update_json(keys::REGISTERED_USERS, |users: &mut Vec<RegisteredUser>| {
                if users.iter().any(|u| u.phone_number == user.phone_number) {
                    return Err(AuthError::AlreadyRegistered);
                }
                users.push(user.clone());
                Ok(user)
            })
            .await?;

        info!("User registered: {}", registered.phone_number);
        Ok(registered)
    }

    pub async fn find_user(&self, phone_number: &str) -> Result<Option<RegisteredUser>, AuthError> {
        let users: Vec<RegisteredUser> = self
            .store
            .get_json(keys::REGISTERED_USERS)
            .await?
            .unwrap_or_default();

        Ok(users.into_iter().find(|u| u.phone_number == phone_number))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<RegisteredUser, AuthError> {
        validate_phone_number(&request.phone_number)?;

        let user = self
            .find_user(&request.phone_number)
            .await?
            .ok_or(AuthError::NotRegistered)?;

        debug!("User logged in: {}", user.phone_number);
        Ok(user)
    }

    pub fn issue_session(&self, phone_number: &str) -> Result<SessionResponse, AuthError> {
        let (token, expires_at) =
            create_session_token(phone_number, &self.session_secret, self.session_ttl_hours)
                .map_err(AuthError::Session)?;

        Ok(SessionResponse {
            token,
            phone_number: phone_number.to_string(),
            expires_at,
        })
    }

    /// Revoke a session id, dropping revocations whose tokens have since expired.
    pub async fn revoke_session(
        &self,
        session_id: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<(), AuthError> {
        let now = Utc::now();

        let remaining = self
            .store
            .update_json(keys::REVOKED_SESSIONS, |revoked: &mut Vec<RevokedSession>| {
                revoked.retain(|entry| !entry.is_expired(now));
                if !revoked.iter().any(|entry| entry.jti == session_id) {
                    revoked.push(RevokedSession {
                        jti: session_id.to_string(),
                        expires_at,
                    });
                }
                Ok::<_, AuthError>(revoked.len())
            })
            .await?;

        info!("Session revoked: {} ({} revocations held)", session_id, remaining);
        Ok(())
    }
}
