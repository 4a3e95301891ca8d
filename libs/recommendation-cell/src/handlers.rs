use std::sync::Arc;

use axum::extract::{Json, State};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{RecommendationRequest, SpecialistRecommendation};
use crate::services::recommendation::RecommendationService;

/// Recommend medical specialities for the described symptoms.
#[axum::debug_handler]
pub async fn recommend_specialists(
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<Vec<SpecialistRecommendation>>, AppError> {
    let recommendations = RecommendationService::new(&config)
        .recommend(request)
        .await?;

    Ok(Json(recommendations))
}
