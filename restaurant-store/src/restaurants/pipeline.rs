//! Save pipeline
//!
//! Every create and update runs the same ordered steps on the candidate
//! record before it is written:
//!
//! 1. [`NormalizeText`] - name, suburb and cuisine casing
//! 2. [`DeriveSlug`] - slug from the normalized name
//! 3. [`GeocodeAddress`] - address to GeoJSON point, then clear the address
//!
//! A step either returns the updated record or stops the save. Nothing is
//! persisted by the pipeline itself.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use super::normalize::{cuisine_case, name_case, suburb_case};
use super::slug::slug_for;
use crate::db::models::Restaurant;
use crate::geocoding::{GeocodeError, Geocoder};
use crate::utils::FieldError;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Validation(#[from] FieldError),

    #[error(transparent)]
    Geocoding(#[from] GeocodeError),
}

/// One step of the save pipeline
#[async_trait]
pub trait SaveStep: Send + Sync {
    fn name(&self) -> &'static str;

    async fn apply(&self, restaurant: Restaurant) -> Result<Restaurant, SaveError>;
}

pub struct NormalizeText;

#[async_trait]
impl SaveStep for NormalizeText {
    fn name(&self) -> &'static str {
        "normalize_text"
    }

    async fn apply(&self, mut restaurant: Restaurant) -> Result<Restaurant, SaveError> {
        restaurant.name = name_case(&restaurant.name);
        restaurant.suburb = suburb_case(&restaurant.suburb);
        restaurant.cuisine = restaurant.cuisine.iter().map(|c| cuisine_case(c)).collect();
        Ok(restaurant)
    }
}

pub struct DeriveSlug;

#[async_trait]
impl SaveStep for DeriveSlug {
    fn name(&self) -> &'static str {
        "derive_slug"
    }

    async fn apply(&self, mut restaurant: Restaurant) -> Result<Restaurant, SaveError> {
        restaurant.slug = slug_for(&restaurant.name);
        Ok(restaurant)
    }
}

/// Geocode `address`, or the address the record was last geocoded from when
/// it has already been through a save.
pub struct GeocodeAddress {
    geocoder: Arc<dyn Geocoder>,
}

impl GeocodeAddress {
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        Self { geocoder }
    }
}

#[async_trait]
impl SaveStep for GeocodeAddress {
    fn name(&self) -> &'static str {
        "geocode_address"
    }

    async fn apply(&self, mut restaurant: Restaurant) -> Result<Restaurant, SaveError> {
        let address = restaurant
            .address
            .clone()
            .or_else(|| restaurant.geocoded_address.clone())
            .or_else(|| {
                restaurant
                    .location
                    .as_ref()
                    .and_then(|l| l.formatted_address.clone())
            })
            .filter(|a| !a.trim().is_empty())
            .ok_or_else(|| FieldError::required("address", "Please add an address"))?;

        let matches = self.geocoder.geocode(&address).await.inspect_err(|e| {
            tracing::warn!(address = %address, error = %e, "Geocoding failed");
        })?;

        let first = matches.into_iter().next().ok_or_else(|| {
            tracing::warn!(address = %address, "Geocoding returned no candidates");
            GeocodeError::NoResult(address.clone())
        })?;

        restaurant.location = Some(first.to_location());
        restaurant.geocoded_address = Some(address);
        restaurant.address = None;
        Ok(restaurant)
    }
}

/// Ordered save steps
pub struct SavePipeline {
    steps: Vec<Box<dyn SaveStep>>,
}

impl SavePipeline {
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            steps: vec![
                Box::new(NormalizeText),
                Box::new(DeriveSlug),
                Box::new(GeocodeAddress::new(geocoder)),
            ],
        }
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    pub async fn run(&self, mut restaurant: Restaurant) -> Result<Restaurant, SaveError> {
        for step in &self.steps {
            tracing::debug!(step = step.name(), name = %restaurant.name, "Running save step");
            restaurant = step.apply(restaurant).await?;
        }
        Ok(restaurant)
    }
}

impl std::fmt::Debug for SavePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SavePipeline")
            .field("steps", &self.step_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocoding::GeocodeMatch;
    use shared::models::GeoType;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticGeocoder {
        matches: Vec<GeocodeMatch>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Geocoder for StaticGeocoder {
        async fn geocode(&self, _address: &str) -> Result<Vec<GeocodeMatch>, GeocodeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.matches.clone())
        }
    }

    fn geocoder(matches: Vec<GeocodeMatch>) -> Arc<StaticGeocoder> {
        Arc::new(StaticGeocoder {
            matches,
            calls: AtomicUsize::new(0),
        })
    }

    fn bondi() -> GeocodeMatch {
        GeocodeMatch {
            longitude: 151.2743,
            latitude: -33.8915,
            formatted_address: Some("1 Campbell Pde, Bondi Beach NSW 2026, AU".into()),
            ..Default::default()
        }
    }

    fn candidate() -> Restaurant {
        let mut r = Restaurant::new("grilled BURGER house", "BONDI beach");
        r.cuisine = vec!["ITALIAN".into(), "thai".into()];
        r.address = Some("1 Campbell Pde".into());
        r
    }

    #[tokio::test]
    async fn test_steps_run_in_order() {
        let pipeline = SavePipeline::new(geocoder(vec![bondi()]));
        assert_eq!(
            pipeline.step_names(),
            vec!["normalize_text", "derive_slug", "geocode_address"]
        );

        let saved = pipeline.run(candidate()).await.unwrap();
        assert_eq!(saved.name, "Grilled BURGER House");
        assert_eq!(saved.suburb, "Bondi Beach");
        assert_eq!(saved.cuisine, vec!["Italian", "Thai"]);
        // Slug comes from the normalized name
        assert_eq!(saved.slug, "grilled-burger-house");
    }

    #[tokio::test]
    async fn test_geocode_sets_point_and_clears_address() {
        let pipeline = SavePipeline::new(geocoder(vec![bondi()]));
        let saved = pipeline.run(candidate()).await.unwrap();

        let location = saved.location.unwrap();
        assert_eq!(location.geo_type, GeoType::Point);
        assert_eq!(location.coordinates, [151.2743, -33.8915]);
        assert!(saved.address.is_none());
    }

    #[tokio::test]
    async fn test_empty_geocode_fails() {
        let pipeline = SavePipeline::new(geocoder(vec![]));
        match pipeline.run(candidate()).await {
            Err(SaveError::Geocoding(GeocodeError::NoResult(addr))) => {
                assert_eq!(addr, "1 Campbell Pde")
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resave_geocodes_stored_address() {
        let g = geocoder(vec![bondi()]);
        let pipeline = SavePipeline::new(g.clone());

        let first = pipeline.run(candidate()).await.unwrap();
        let second = pipeline.run(first.clone()).await.unwrap();

        assert_eq!(g.calls.load(Ordering::SeqCst), 2);
        assert_eq!(second.slug, first.slug);
        assert_eq!(second.location, first.location);
    }

    #[tokio::test]
    async fn test_resave_without_formatted_address() {
        let g = geocoder(vec![GeocodeMatch {
            longitude: 1.0,
            latitude: 2.0,
            ..Default::default()
        }]);
        let pipeline = SavePipeline::new(g.clone());

        let first = pipeline.run(candidate()).await.unwrap();
        assert_eq!(first.geocoded_address.as_deref(), Some("1 Campbell Pde"));
        assert!(first.location.as_ref().unwrap().formatted_address.is_none());

        let second = pipeline.run(first).await.unwrap();
        assert_eq!(second.location.unwrap().coordinates, [1.0, 2.0]);
        assert_eq!(g.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_missing_address_is_validation_error() {
        let pipeline = SavePipeline::new(geocoder(vec![bondi()]));
        let mut r = candidate();
        r.address = None;
        match pipeline.run(r).await {
            Err(SaveError::Validation(e)) => assert_eq!(e.field, "address"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
