//! Test helpers: in-memory store and a scripted geocoder

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use restaurant_store::{DbService, GeocodeError, GeocodeMatch, Geocoder, RestaurantService};
use shared::models::RestaurantCreate;

/// Geocoder answering from a fixed table; unknown addresses get no candidates
#[derive(Default)]
pub struct FakeGeocoder {
    answers: HashMap<String, GeocodeMatch>,
    calls: AtomicUsize,
    fail: bool,
}

impl FakeGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every lookup fails with a transport error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with(mut self, address: &str, longitude: f64, latitude: f64, formatted: &str) -> Self {
        let m = GeocodeMatch {
            longitude,
            latitude,
            formatted_address: Some(formatted.to_string()),
            street_name: Some(address.to_string()),
            city: Some("Sydney".to_string()),
            state_code: Some("NSW".to_string()),
            zipcode: Some("2000".to_string()),
            country_code: Some("AU".to_string()),
        };
        self.answers.insert(address.to_string(), m.clone());
        // Re-saves look up the stored formatted address
        self.answers.insert(formatted.to_string(), m);
        self
    }

    /// Answer `address` with coordinates only, no address parts
    pub fn with_bare(mut self, address: &str, longitude: f64, latitude: f64) -> Self {
        let m = GeocodeMatch {
            longitude,
            latitude,
            ..Default::default()
        };
        self.answers.insert(address.to_string(), m);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeMatch>, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(GeocodeError::Transport("connection refused".to_string()));
        }
        Ok(self.answers.get(address).cloned().into_iter().collect())
    }
}

pub const BONDI: &str = "1 Campbell Pde";
pub const BONDI_FORMATTED: &str = "1 Campbell Pde, Bondi Beach NSW 2026, AU";
pub const BONDI_LNG: f64 = 151.2743;
pub const BONDI_LAT: f64 = -33.8915;

pub const MANLY: &str = "1 The Corso";
pub const MANLY_FORMATTED: &str = "1 The Corso, Manly NSW 2095, AU";
pub const MANLY_LNG: f64 = 151.2871;
pub const MANLY_LAT: f64 = -33.7990;

pub const PARRAMATTA: &str = "1 Church St";
pub const PARRAMATTA_FORMATTED: &str = "1 Church St, Parramatta NSW 2150, AU";
pub const PARRAMATTA_LNG: f64 = 151.0036;
pub const PARRAMATTA_LAT: f64 = -33.8150;

pub fn sydney_geocoder() -> Arc<FakeGeocoder> {
    Arc::new(
        FakeGeocoder::new()
            .with(BONDI, BONDI_LNG, BONDI_LAT, BONDI_FORMATTED)
            .with(MANLY, MANLY_LNG, MANLY_LAT, MANLY_FORMATTED)
            .with(PARRAMATTA, PARRAMATTA_LNG, PARRAMATTA_LAT, PARRAMATTA_FORMATTED),
    )
}

pub async fn service_with(geocoder: Arc<FakeGeocoder>) -> (DbService, RestaurantService) {
    restaurant_store::init_logger();
    let db = DbService::memory().await.expect("in-memory database");
    let service = RestaurantService::new(&db, geocoder);
    (db, service)
}

pub fn create_payload(name: &str, suburb: &str, address: &str) -> RestaurantCreate {
    RestaurantCreate {
        name: name.to_string(),
        suburb: suburb.to_string(),
        address: address.to_string(),
        cuisine: vec!["ITALIAN".to_string(), "thai".to_string()],
        ..Default::default()
    }
}
