pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{LocationError, NominatimAddress};
pub use router::location_routes;
pub use services::geocoder::GeocoderService;
