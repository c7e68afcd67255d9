//! Geocoding
//!
//! Turns a free-form postal address into candidate coordinates. The save
//! pipeline only ever uses the first candidate.

pub mod mapquest;

pub use mapquest::MapQuestGeocoder;

use std::sync::Arc;

use async_trait::async_trait;
use shared::models::{GeoLocation, GeoType};
use shared::{AppError, ErrorCode};
use thiserror::Error;

use crate::core::{GeocoderConfig, GeocoderProvider};

/// One candidate returned by a geocoding service
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeocodeMatch {
    pub longitude: f64,
    pub latitude: f64,
    pub formatted_address: Option<String>,
    pub street_name: Option<String>,
    pub city: Option<String>,
    pub state_code: Option<String>,
    pub zipcode: Option<String>,
    pub country_code: Option<String>,
}

impl GeocodeMatch {
    /// Project the match onto a stored GeoJSON point
    pub fn to_location(&self) -> GeoLocation {
        GeoLocation {
            geo_type: GeoType::Point,
            coordinates: [self.longitude, self.latitude],
            formatted_address: self.formatted_address.clone(),
            street: self.street_name.clone(),
            city: self.city.clone(),
            state: self.state_code.clone(),
            zipcode: self.zipcode.clone(),
            country: self.country_code.clone(),
        }
    }
}

/// Geocoding failures. All of them are worth retrying later.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Could not reach the service
    #[error("Geocoder request failed: {0}")]
    Transport(String),

    /// The service answered with an error status
    #[error("Geocoder returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The service answered with something we could not read
    #[error("Geocoder response malformed: {0}")]
    Malformed(String),

    /// The service answered, but found nothing
    #[error("No geocoding result for '{0}'")]
    NoResult(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GeocodeError::Malformed(err.to_string())
        } else {
            GeocodeError::Transport(err.to_string())
        }
    }
}

impl From<GeocodeError> for AppError {
    fn from(err: GeocodeError) -> Self {
        let code = match err {
            GeocodeError::NoResult(_) => ErrorCode::AddressNotFound,
            _ => ErrorCode::GeocodingFailed,
        };
        AppError::with_message(code, err.to_string()).with_detail("field", "address")
    }
}

/// Address lookup service
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Candidate matches for `address`, best first
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeMatch>, GeocodeError>;
}

/// Build the configured geocoder
pub fn from_config(config: &GeocoderConfig) -> Result<Arc<dyn Geocoder>, AppError> {
    match config.provider {
        GeocoderProvider::MapQuest => {
            if config.api_key.is_empty() {
                return Err(AppError::config("GEOCODER_API_KEY is required for mapquest"));
            }
            let geocoder = MapQuestGeocoder::new(config).map_err(AppError::from)?;
            Ok(Arc::new(geocoder))
        }
    }
}
