use serde_json::Value;
use tracing::{info, warn};

use shared_config::AppConfig;

use crate::models::{RecommendationError, RecommendationRequest, SpecialistRecommendation};
use crate::prompt;
use crate::services::ai::AiService;

pub struct RecommendationService<'a> {
    config: &'a AppConfig,
}

impl<'a> RecommendationService<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    pub async fn recommend(
        &self,
        request: RecommendationRequest,
    ) -> Result<Vec<SpecialistRecommendation>, RecommendationError> {
        let context = request.validate()?;
        let ai = AiService::new(self.config).inspect_err(|_| {
            warn!("Recommendation requested but GEMINI_API_KEY is not set");
        })?;

        let text = ai.generate_json(&prompt::render(&context)).await?;
        let recommendations = parse_recommendations(&text)?;

        info!(
            "AI returned {} specialist recommendations for {}",
            recommendations.len(),
            context.location
        );
        Ok(recommendations)
    }
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Anything after the opening fence up to the newline is a language tag
    let body = match rest.split_once('\n') {
        Some((_tag, body)) => body,
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Parse model output into recommendations, rejecting anything off-shape.
pub fn parse_recommendations(text: &str) -> Result<Vec<SpecialistRecommendation>, RecommendationError> {
    let value: Value = serde_json::from_str(strip_code_fence(text))
        .map_err(|e| RecommendationError::MalformedResponse(e.to_string()))?;

    let items = value
        .as_array()
        .ok_or_else(|| RecommendationError::MalformedResponse("expected a JSON array".to_string()))?;

    items
        .iter()
        .map(|item| {
            let field = |name: &str| {
                item[name]
                    .as_str()
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
                    .ok_or_else(|| {
                        RecommendationError::MalformedResponse(format!("missing {}", name))
                    })
            };
            Ok(SpecialistRecommendation {
                speciality: field("speciality")?,
                reason: field("reason")?,
            })
        })
        .collect()
}
