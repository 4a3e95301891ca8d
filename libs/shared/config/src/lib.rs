use std::env;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_STORAGE_PATH: &str = "data/local_storage.json";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_GEOCODER_USER_AGENT: &str = "hello-doctor/0.1";
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;
/// Upper bound for `SESSION_TTL_HOURS` (one year).
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_path: PathBuf,
    pub session_secret: String,
    pub session_ttl_hours: i64,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub nominatim_base_url: String,
    pub geocoder_user_agent: String,
    pub port: u16,
}

fn parse_session_ttl(raw: Option<String>) -> i64 {
    let Some(raw) = raw else {
        return DEFAULT_SESSION_TTL_HOURS;
    };

    match raw.trim().parse::<i64>() {
        Ok(hours) if (1..=MAX_SESSION_TTL_HOURS).contains(&hours) => hours,
        _ => {
            warn!(
                "SESSION_TTL_HOURS={} is not between 1 and {}, using {}",
                raw, MAX_SESSION_TTL_HOURS, DEFAULT_SESSION_TTL_HOURS
            );
            DEFAULT_SESSION_TTL_HOURS
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            storage_path: env::var("HELLO_DOCTOR_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    warn!("HELLO_DOCTOR_STORAGE_PATH not set, using {}", DEFAULT_STORAGE_PATH);
                    PathBuf::from(DEFAULT_STORAGE_PATH)
                }),
            session_secret: env::var("SESSION_SECRET")
                .unwrap_or_else(|_| {
                    warn!("SESSION_SECRET not set, using empty value");
                    String::new()
                }),
            session_ttl_hours: parse_session_ttl(env::var("SESSION_TTL_HOURS").ok()),
            gemini_api_key: env::var("GEMINI_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("GEMINI_API_KEY not set, using empty value");
                    String::new()
                }),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            nominatim_base_url: env::var("NOMINATIM_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_NOMINATIM_BASE_URL.to_string()),
            geocoder_user_agent: env::var("GEOCODER_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_GEOCODER_USER_AGENT.to_string()),
            port: env::var("HELLO_DOCTOR_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.session_secret.is_empty()
    }

    pub fn is_ai_configured(&self) -> bool {
        !self.gemini_api_key.is_empty()
            && !self.gemini_model.is_empty()
            && !self.gemini_base_url.is_empty()
    }
}
