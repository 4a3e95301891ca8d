use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::AppError;

pub const OVERLOADED_MESSAGE: &str =
    "The AI service is currently overloaded. Please try again in a few moments.";
pub const GENERIC_FAILURE_MESSAGE: &str =
    "An error occurred while fetching recommendations. Please try again later.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub symptoms: String,
    pub location: String,
    #[serde(default)]
    pub past_consultation_history: Option<String>,
}

/// Validated input, ready to be rendered into the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientContext {
    pub symptoms: String,
    pub location: String,
    pub past_consultation_history: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialistRecommendation {
    pub speciality: String,
    pub reason: String,
}

#[derive(Error, Debug)]
pub enum RecommendationError {
    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("AI service is not configured")]
    NotConfigured,

    #[error("AI service unavailable (503)")]
    Overloaded,

    #[error("AI request failed: {0}")]
    Upstream(String),

    #[error("Malformed AI response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for RecommendationError {
    fn from(err: reqwest::Error) -> Self {
        RecommendationError::Upstream(err.to_string())
    }
}

impl From<RecommendationError> for AppError {
    fn from(err: RecommendationError) -> Self {
        match err {
            RecommendationError::InvalidInput(msg) => AppError::ValidationError(msg.to_string()),
            RecommendationError::Overloaded => AppError::ExternalService(OVERLOADED_MESSAGE.to_string()),
            _ => AppError::ExternalService(GENERIC_FAILURE_MESSAGE.to_string()),
        }
    }
}

impl RecommendationRequest {
    pub fn validate(self) -> Result<PatientContext, RecommendationError> {
        let symptoms = self.symptoms.trim().to_string();
        let location = self.location.trim().to_string();
        let history = self
            .past_consultation_history
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty());

        let symptoms_len = symptoms.chars().count();
        if symptoms_len < 10 {
            return Err(RecommendationError::InvalidInput(
                "Please describe your symptoms in at least 10 characters.",
            ));
        }
        if symptoms_len > 1000 {
            return Err(RecommendationError::InvalidInput("Symptoms description is too long."));
        }

        let location_len = location.chars().count();
        if location_len < 2 {
            return Err(RecommendationError::InvalidInput("Please enter your city or area."));
        }
        if location_len > 100 {
            return Err(RecommendationError::InvalidInput("Location is too long."));
        }

        if history.as_ref().is_some_and(|h| h.chars().count() > 1000) {
            return Err(RecommendationError::InvalidInput("Past history is too long."));
        }

        Ok(PatientContext {
            symptoms,
            location,
            past_consultation_history: history,
        })
    }
}
