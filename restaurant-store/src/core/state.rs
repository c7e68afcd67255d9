use std::sync::Arc;

use shared::AppError;

use crate::core::Config;
use crate::db::DbService;
use crate::geocoding::{self, Geocoder};
use crate::restaurants::RestaurantService;

/// Store state, holds the shared handles every caller needs
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | Configuration (immutable) |
/// | db | Embedded database |
/// | restaurants | Restaurant lifecycle service |
///
/// Cloning is cheap: all fields are handles.
#[derive(Clone, Debug)]
pub struct StoreState {
    pub config: Config,
    pub db: DbService,
    pub restaurants: RestaurantService,
}

impl StoreState {
    /// Open the on-disk database and build the configured geocoder
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let geocoder = geocoding::from_config(&config.geocoder)?;
        Self::with_geocoder(config, geocoder).await
    }

    /// Open the on-disk database with a caller-supplied geocoder
    pub async fn with_geocoder(
        config: &Config,
        geocoder: Arc<dyn Geocoder>,
    ) -> Result<Self, AppError> {
        let db = DbService::open(config).await?;
        let restaurants = RestaurantService::new(&db, geocoder);
        tracing::info!(work_dir = %config.work_dir, environment = %config.environment, "Store initialized");
        Ok(Self {
            config: config.clone(),
            db,
            restaurants,
        })
    }
}
