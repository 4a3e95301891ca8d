use tracing::debug;

use crate::catalog;
use crate::models::{Provider, ProviderError, ProviderSearchFilters, ProviderSummary};

/// Read-only access to the provider catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProviderService;

fn normalized(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

impl ProviderService {
    pub fn new() -> Self {
        Self
    }

    pub fn search(&self, filters: &ProviderSearchFilters) -> Vec<ProviderSummary> {
        // "City, State" from the geocoder matches on the city part.
        let location = normalized(&filters.location).map(|loc| {
            loc.split(',')
                .next()
                .map(str::trim)
                .unwrap_or_default()
                .to_string()
        });
        let speciality = normalized(&filters.speciality);

        let results: Vec<ProviderSummary> = catalog::providers()
            .iter()
            .filter(|p| match &location {
                Some(loc) if !loc.is_empty() => {
                    p.location.to_lowercase().contains(loc) || p.address.to_lowercase().contains(loc)
                }
                _ => true,
            })
            .filter(|p| match &speciality {
                Some(term) => {
                    p.speciality.to_lowercase().contains(term)
                        || p.name.to_lowercase().contains(term)
                        || p.services.iter().any(|s| s.to_lowercase().contains(term))
                }
                None => true,
            })
            .map(Provider::summary)
            .collect();

        debug!("Provider search {:?} matched {} providers", filters, results.len());
        results
    }

    pub fn get_provider(&self, provider_id: &str) -> Result<&'static Provider, ProviderError> {
        catalog::providers()
            .iter()
            .find(|p| p.id == provider_id)
            .ok_or(ProviderError::NotFound)
    }

    pub fn time_slots(&self, provider_id: &str) -> Result<Vec<String>, ProviderError> {
        Ok(self.get_provider(provider_id)?.time_slots())
    }

    pub fn specialities(&self) -> &'static [&'static str] {
        catalog::SPECIALITIES
    }
}
