use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{Provider, ProviderSearchFilters};
use crate::services::ProviderService;

#[derive(Debug, Deserialize)]
pub struct ProviderSearchQuery {
    pub location: Option<String>,
    pub speciality: Option<String>,
}

#[axum::debug_handler]
pub async fn search_providers(
    State(_state): State<Arc<AppConfig>>,
    Query(query): Query<ProviderSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let filters = ProviderSearchFilters {
        location: query.location,
        speciality: query.speciality,
    };

    let providers = ProviderService::new().search(&filters);

    Ok(Json(json!({
        "providers": providers,
        "total": providers.len(),
    })))
}

pub async fn list_specialities(State(_state): State<Arc<AppConfig>>) -> Json<Value> {
    Json(json!({ "specialities": ProviderService::new().specialities() }))
}

#[axum::debug_handler]
pub async fn get_provider(
    State(_state): State<Arc<AppConfig>>,
    Path(provider_id): Path<String>,
) -> Result<Json<Provider>, AppError> {
    let provider = ProviderService::new().get_provider(&provider_id)?;
    Ok(Json(provider.clone()))
}

#[axum::debug_handler]
pub async fn get_provider_slots(
    State(_state): State<Arc<AppConfig>>,
    Path(provider_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let slots = ProviderService::new().time_slots(&provider_id)?;

    Ok(Json(json!({
        "providerId": provider_id,
        "slots": slots,
    })))
}
