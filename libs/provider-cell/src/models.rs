use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderType {
    Doctor,
    Clinic,
    Hospital,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityItem {
    pub day: String,
    pub slots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub provider_type: ProviderType,
    pub speciality: String,
    pub experience: String,
    pub qualifications: String,
    pub image: String,
    pub bio: String,
    pub rating: f32,
    pub reviews_count: u32,
    pub consultation_fee: String,
    pub languages: Vec<String>,
    pub clinic_name: String,
    pub location: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub availability: Vec<AvailabilityItem>,
    pub services: Vec<String>,
    pub gallery: Vec<GalleryImage>,
}

impl Provider {
    /// Every slot across the provider's availability days, de-duplicated and sorted.
    pub fn time_slots(&self) -> Vec<String> {
        let mut slots: Vec<String> = self
            .availability
            .iter()
            .flat_map(|a| a.slots.iter().cloned())
            .collect();
        slots.sort();
        slots.dedup();
        slots
    }

    pub fn summary(&self) -> ProviderSummary {
        ProviderSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            speciality: self.speciality.clone(),
            experience: self.experience.clone(),
            location: self.location.clone(),
            image: self.image.clone(),
            rating: self.rating,
            reviews: self.reviews_count,
        }
    }
}

/// Search-result card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSummary {
    pub id: String,
    pub name: String,
    pub speciality: String,
    pub experience: String,
    pub location: String,
    pub image: String,
    pub rating: f32,
    pub reviews: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSearchFilters {
    pub location: Option<String>,
    pub speciality: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("Provider not found")]
    NotFound,
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotFound => AppError::NotFound(err.to_string()),
        }
    }
}
