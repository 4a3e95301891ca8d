use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A logged-out session. Kept until the token would have expired anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevokedSession {
    pub jti: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl RevokedSession {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }
}

/// Claims carried by a session token. `sub` is the user's phone number.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub jti: String,
    pub exp: Option<u64>,
    pub iat: Option<u64>,
}

/// The authenticated user, inserted into request extensions by the auth middleware.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub phone_number: String,
    pub session_id: String,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub token: String,
    pub phone_number: String,
    pub expires_at: DateTime<Utc>,
}
