use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{LocationResponse, ReverseQuery};
use crate::services::geocoder::GeocoderService;

#[axum::debug_handler]
pub async fn lookup_pincode(
    State(config): State<Arc<AppConfig>>,
    Path(code): Path<String>,
) -> Result<Json<LocationResponse>, AppError> {
    let location = GeocoderService::new(&config).lookup_postal_code(&code).await?;
    Ok(Json(LocationResponse { location }))
}

#[axum::debug_handler]
pub async fn reverse_geocode(
    State(config): State<Arc<AppConfig>>,
    Query(query): Query<ReverseQuery>,
) -> Result<Json<LocationResponse>, AppError> {
    let location = GeocoderService::new(&config)
        .reverse(query.lat, query.lon)
        .await?;
    Ok(Json(LocationResponse { location }))
}
