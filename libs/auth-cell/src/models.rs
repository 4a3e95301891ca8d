use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_database::StoreError;
use shared_models::error::AppError;

pub const INVALID_PHONE_MESSAGE: &str =
    "Please enter a valid Indian mobile number with +91 prefix (e.g., +919876543210).";

/// An entry of the registered-users list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub phone_number: String,
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Please enter your full name.")]
    MissingFullName,

    #[error("{}", INVALID_PHONE_MESSAGE)]
    InvalidPhoneNumber,

    #[error("This phone number is already registered. Please login.")]
    AlreadyRegistered,

    #[error("User not registered. Please register first.")]
    NotRegistered,

    #[error("Failed to create session: {0}")]
    Session(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingFullName | AuthError::InvalidPhoneNumber => {
                AppError::ValidationError(err.to_string())
            }
            AuthError::AlreadyRegistered => AppError::Conflict(err.to_string()),
            AuthError::NotRegistered => AppError::NotFound(err.to_string()),
            AuthError::Session(msg) => AppError::Internal(msg),
            AuthError::Storage(e) => e.into(),
        }
    }
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\+91[6-9]\d{9}$").expect("phone pattern is valid"))
}

/// Indian mobile number with the +91 prefix, e.g. `+919876543210`.
pub fn validate_phone_number(phone_number: &str) -> Result<(), AuthError> {
    if phone_pattern().is_match(phone_number) {
        Ok(())
    } else {
        Err(AuthError::InvalidPhoneNumber)
    }
}

pub fn validate_full_name(full_name: &str) -> Result<(), AuthError> {
    if full_name.trim().is_empty() {
        Err(AuthError::MissingFullName)
    } else {
        Ok(())
    }
}
