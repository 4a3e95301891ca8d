pub mod handlers;
pub mod models;
pub mod prompt;
pub mod router;
pub mod services;

pub use models::{RecommendationError, RecommendationRequest, SpecialistRecommendation};
pub use router::recommendation_routes;
