use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::AppError;

/// The `address` object of a Nominatim result. Only the fields used for the
/// short address are read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NominatimAddress {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub hamlet: Option<String>,
    pub suburb: Option<String>,
    pub county: Option<String>,
    pub state_district: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    #[serde(default)]
    pub address: Option<NominatimAddress>,
}

fn first_present<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .map(str::trim)
        .find(|c| !c.is_empty())
}

impl NominatimAddress {
    /// "City, State" style label. Empty when nothing usable is present.
    pub fn short_address(&self) -> String {
        let city = first_present(&[
            &self.city,
            &self.town,
            &self.village,
            &self.hamlet,
            &self.suburb,
            &self.county,
            &self.state_district,
            &self.state,
        ]);
        let state = first_present(&[&self.state, &self.state_district, &self.region]);
        let country = first_present(&[&self.country]);

        match (city, state, country) {
            (Some(city), Some(state), _) => format!("{}, {}", city, state),
            (Some(city), None, Some(country)) => format!("{}, {}", city, country),
            (None, Some(state), Some(country)) => format!("{}, {}", state, country),
            (_, _, Some(country)) => country.to_string(),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReverseQuery {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationResponse {
    pub location: String,
}

#[derive(Error, Debug)]
pub enum LocationError {
    #[error("Please enter a valid pincode.")]
    InvalidPincode,

    #[error("Invalid coordinates.")]
    InvalidCoordinates,

    #[error("No address found for this pincode.")]
    PincodeNotFound,

    #[error("No concise address found for this pincode.")]
    NoConcisePincodeAddress,

    #[error("Could not fetch address for this pincode.")]
    PincodeLookupFailed,

    #[error("Could not extract a concise address. Please enter it manually.")]
    NoConciseAddress,

    #[error("Could not fetch address. Please enter it manually.")]
    ReverseLookupFailed,
}

impl From<LocationError> for AppError {
    fn from(err: LocationError) -> Self {
        match err {
            LocationError::InvalidPincode | LocationError::InvalidCoordinates => {
                AppError::ValidationError(err.to_string())
            }
            LocationError::PincodeNotFound
            | LocationError::NoConcisePincodeAddress
            | LocationError::NoConciseAddress => AppError::NotFound(err.to_string()),
            LocationError::PincodeLookupFailed | LocationError::ReverseLookupFailed => {
                AppError::ExternalService(err.to_string())
            }
        }
    }
}
