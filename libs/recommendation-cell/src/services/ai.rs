use reqwest::{header, Client, StatusCode};
use serde_json::{json, Value};
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::models::RecommendationError;

/// Thin client for the Gemini `generateContent` endpoint.
pub struct AiService {
    api_key: String,
    model: String,
    base_url: String,
    http_client: Client,
}

impl AiService {
    pub fn new(config: &AppConfig) -> Result<Self, RecommendationError> {
        if !config.is_ai_configured() {
            return Err(RecommendationError::NotConfigured);
        }

        Ok(Self {
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            http_client: Client::new(),
        })
    }

    fn response_schema() -> Value {
        json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "speciality": { "type": "STRING" },
                    "reason": { "type": "STRING" }
                },
                "required": ["speciality", "reason"]
            }
        })
    }

    /// Send a prompt and return the first candidate's text.
    pub async fn generate_json(&self, prompt: &str) -> Result<String, RecommendationError> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model);
        debug!("Calling AI model {}", self.model);

        let body = json!({
            "contents": [
                { "role": "user", "parts": [{ "text": prompt }] }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": Self::response_schema()
            }
        });

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::SERVICE_UNAVAILABLE {
            error!("AI model {} is overloaded", self.model);
            return Err(RecommendationError::Overloaded);
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("AI API error {}: {}", status, error_text);
            return Err(RecommendationError::Upstream(format!("status {}", status)));
        }

        let ai_response: Value = response.json().await?;
        ai_response["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| RecommendationError::MalformedResponse("no candidate text".to_string()))
    }
}
