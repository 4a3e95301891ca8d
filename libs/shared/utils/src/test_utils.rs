use std::sync::Arc;

use base64::{engine::general_purpose, Engine as _};
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use tempfile::TempDir;
use uuid::Uuid;

use shared_config::{
    AppConfig, DEFAULT_GEMINI_MODEL, DEFAULT_GEOCODER_USER_AGENT,
};
use shared_models::auth::User;

/// Test configuration backed by a private temporary store directory.
///
/// Keep the `TestConfig` alive for as long as the store is used; dropping it
/// removes the directory.
pub struct TestConfig {
    pub session_secret: String,
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub nominatim_base_url: String,
    pub storage_dir: TempDir,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            session_secret: "test-secret-key-for-session-tokens-must-be-long-enough".to_string(),
            gemini_api_key: "test-gemini-key".to_string(),
            gemini_base_url: "http://localhost:9".to_string(),
            nominatim_base_url: "http://localhost:9".to_string(),
            storage_dir: TempDir::new().expect("failed to create temp store dir"),
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            storage_path: self.storage_dir.path().join("local_storage.json"),
            session_secret: self.session_secret.clone(),
            session_ttl_hours: 24,
            gemini_api_key: self.gemini_api_key.clone(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: self.gemini_base_url.clone(),
            nominatim_base_url: self.nominatim_base_url.clone(),
            geocoder_user_agent: DEFAULT_GEOCODER_USER_AGENT.to_string(),
            port: 0,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct TestUser {
    pub phone_number: String,
    pub full_name: String,
}

impl Default for TestUser {
    fn default() -> Self {
        Self::new("+919876543210", "Test Patient")
    }
}

impl TestUser {
    pub fn new(phone_number: &str, full_name: &str) -> Self {
        Self {
            phone_number: phone_number.to_string(),
            full_name: full_name.to_string(),
        }
    }

    pub fn to_user(&self) -> User {
        User {
            phone_number: self.phone_number.clone(),
            session_id: Uuid::new_v4().to_string(),
            expires_at: Some(Utc::now() + Duration::hours(24)),
        }
    }
}

pub struct JwtTestUtils;

impl JwtTestUtils {
    pub fn create_test_token(user: &TestUser, secret: &str, exp_hours: Option<i64>) -> String {
        let now = Utc::now();
        let exp = now + Duration::hours(exp_hours.unwrap_or(24));

        let header = json!({
            "alg": "HS256",
            "typ": "JWT"
        });

        let payload = json!({
            "sub": user.phone_number,
            "jti": Uuid::new_v4().to_string(),
            "iat": now.timestamp(),
            "exp": exp.timestamp()
        });

        let header_encoded = general_purpose::URL_SAFE_NO_PAD.encode(header.to_string());
        let payload_encoded = general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());

        let signing_input = format!("{}.{}", header_encoded, payload_encoded);

        let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(signing_input.as_bytes());
        let signature = mac.finalize().into_bytes();
        let signature_encoded = general_purpose::URL_SAFE_NO_PAD.encode(signature);

        format!("{}.{}", signing_input, signature_encoded)
    }

    pub fn create_expired_token(user: &TestUser, secret: &str) -> String {
        Self::create_test_token(user, secret, Some(-1))
    }

    pub fn create_invalid_signature_token(user: &TestUser) -> String {
        Self::create_test_token(user, "wrong-secret", Some(24))
    }

    pub fn create_malformed_token() -> String {
        "invalid.token.format".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::validate_token;

    #[test]
    fn test_tokens_validate_with_config_secret() {
        let config = TestConfig::default().to_app_config();
        let user = TestUser::default();
        let token = JwtTestUtils::create_test_token(&user, &config.session_secret, None);

        let validated = validate_token(&token, &config.session_secret).unwrap();
        assert_eq!(validated.phone_number, user.phone_number);
    }

    #[test]
    fn invalid_tokens_fail() {
        let config = TestConfig::default().to_app_config();
        let user = TestUser::default();

        assert!(validate_token(&JwtTestUtils::create_expired_token(&user, &config.session_secret), &config.session_secret).is_err());
        assert!(validate_token(&JwtTestUtils::create_invalid_signature_token(&user), &config.session_secret).is_err());
        assert!(validate_token(&JwtTestUtils::create_malformed_token(), &config.session_secret).is_err());
    }
}
