use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::models::{LocationError, NominatimPlace};

/// Postal code and reverse lookups against a Nominatim instance.
pub struct GeocoderService {
    base_url: String,
    user_agent: String,
    http_client: Client,
}

fn is_valid_pincode(code: &str) -> bool {
    let len = code.chars().count();
    (1..=8).contains(&len) && code.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

impl GeocoderService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.nominatim_base_url.trim_end_matches('/').to_string(),
            user_agent: config.geocoder_user_agent.clone(),
            http_client: Client::new(),
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, reqwest::Error> {
        self.http_client
            .get(format!("{}{}", self.base_url, path))
            .header(header::USER_AGENT, &self.user_agent)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await
    }

    /// Resolve an Indian postal code to a short "City, State" label.
    pub async fn lookup_postal_code(&self, code: &str) -> Result<String, LocationError> {
        let code = code.trim();
        if !is_valid_pincode(code) {
            return Err(LocationError::InvalidPincode);
        }
        debug!("Looking up pincode {}", code);

        let places: Vec<NominatimPlace> = self
            .get(
                "/search",
                &[
                    ("postalcode", code.to_string()),
                    ("country", "India".to_string()),
                    ("format", "json".to_string()),
                    ("addressdetails", "1".to_string()),
                ],
            )
            .await
            .map_err(|e| {
                error!("Pincode lookup for {} failed: {}", code, e);
                LocationError::PincodeLookupFailed
            })?;

        let place = places.into_iter().next().ok_or(LocationError::PincodeNotFound)?;
        let short = place.address.unwrap_or_default().short_address();
        if short.is_empty() {
            return Err(LocationError::NoConcisePincodeAddress);
        }
        Ok(short)
    }

    pub async fn reverse(&self, lat: f64, lon: f64) -> Result<String, LocationError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(LocationError::InvalidCoordinates);
        }
        debug!("Reverse geocoding {}, {}", lat, lon);

        let place: NominatimPlace = self
            .get(
                "/reverse",
                &[
                    ("format", "json".to_string()),
                    ("lat", lat.to_string()),
                    ("lon", lon.to_string()),
                    ("addressdetails", "1".to_string()),
                ],
            )
            .await
            .map_err(|e| {
                error!("Reverse geocoding failed: {}", e);
                LocationError::ReverseLookupFailed
            })?;

        let short = place.address.unwrap_or_default().short_address();
        if short.is_empty() {
            return Err(LocationError::NoConciseAddress);
        }
        Ok(short)
    }
}
