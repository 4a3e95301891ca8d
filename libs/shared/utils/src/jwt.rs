use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Duration, TimeZone, Utc};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use tracing::debug;
use uuid::Uuid;

use shared_config::MAX_SESSION_TTL_HOURS;
use shared_models::auth::{SessionClaims, User};

type HmacSha256 = Hmac<Sha256>;

fn sign(signing_input: &str, secret: &str) -> Result<String, String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| "Failed to create HMAC".to_string())?;
    mac.update(signing_input.as_bytes());
    Ok(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
}

/// Issue a signed session token for `phone_number`.
pub fn create_session_token(
    phone_number: &str,
    secret: &str,
    ttl_hours: i64,
) -> Result<(String, DateTime<Utc>), String> {
    if secret.is_empty() {
        return Err("Session secret is not set".to_string());
    }

    if !(-MAX_SESSION_TTL_HOURS..=MAX_SESSION_TTL_HOURS).contains(&ttl_hours) {
        return Err(format!("Session lifetime of {} hours is out of range", ttl_hours));
    }

    let now = Utc::now();
    let expires_at = now
        .checked_add_signed(Duration::hours(ttl_hours))
        .ok_or_else(|| "Session expiry is out of range".to_string())?;
    let exp = u64::try_from(expires_at.timestamp())
        .map_err(|_| "Session expiry is before the epoch".to_string())?;
    let iat = u64::try_from(now.timestamp())
        .map_err(|_| "System clock is before the epoch".to_string())?;

    let header = json!({ "alg": "HS256", "typ": "JWT" });
    let claims = SessionClaims {
        sub: phone_number.to_string(),
        jti: Uuid::new_v4().to_string(),
        exp: Some(exp),
        iat: Some(iat),
    };
    let claims = serde_json::to_string(&claims).map_err(|e| e.to_string())?;

    let signing_input = format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(header.to_string()),
        URL_SAFE_NO_PAD.encode(claims)
    );
    let signature = sign(&signing_input, secret)?;

    debug!("Issued session token for user: {}", phone_number);
    Ok((format!("{}.{}", signing_input, signature), expires_at))
}

pub fn validate_token(token: &str, secret: &str) -> Result<User, String> {
    if secret.is_empty() {
        return Err("Session secret is not set".to_string());
    }

    // Split token into parts
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err("Invalid token format".to_string());
    }

    let header_b64 = parts[0];
    let claims_b64 = parts[1];
    let signature_b64 = parts[2];

    let signature = match URL_SAFE_NO_PAD.decode(signature_b64) {
        Ok(sig) => sig,
        Err(e) => {
            debug!("Failed to decode signature: {}", e);
            return Err("Invalid signature encoding".to_string());
        }
    };

    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => return Err("Failed to create HMAC".to_string()),
    };
    mac.update(format!("{}.{}", header_b64, claims_b64).as_bytes());

    if mac.verify_slice(&signature).is_err() {
        debug!("Token signature verification failed");
        return Err("Invalid token signature".to_string());
    }

    let claims_json = match URL_SAFE_NO_PAD.decode(claims_b64) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(json_str) => json_str,
            Err(_) => return Err("Invalid claims encoding".to_string()),
        },
        Err(_) => return Err("Invalid claims encoding".to_string()),
    };

    let claims: SessionClaims = match serde_json::from_str(&claims_json) {
        Ok(c) => c,
        Err(e) => {
            debug!("Failed to parse claims: {}", e);
            return Err("Invalid claims format".to_string());
        }
    };

    if let Some(exp) = claims.exp {
        let now = Utc::now().timestamp() as u64;
        if exp < now {
            debug!("Token expired at {} (now: {})", exp, now);
            return Err("Token expired".to_string());
        }
    }

    let expires_at = claims
        .exp
        .and_then(|timestamp| Utc.timestamp_opt(timestamp as i64, 0).single());

    let user = User {
        phone_number: claims.sub,
        session_id: claims.jti,
        expires_at,
    };

    debug!("Token validated successfully for user: {}", user.phone_number);
    Ok(user)
}
