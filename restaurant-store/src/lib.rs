//! Restaurant directory store
//!
//! Persistence core for restaurant listings: validation, text
//! normalization, slugs, address geocoding and cascading review deletion.
//!
//! ```text
//! restaurant-store/src/
//! ├── core/          # config, store state
//! ├── db/            # embedded SurrealDB, models, repositories
//! ├── geocoding/     # Geocoder trait, MapQuest client
//! ├── restaurants/   # save pipeline, restaurant service
//! └── utils/         # logging, validation, time, distance
//! ```

pub mod core;
pub mod db;
pub mod geocoding;
pub mod restaurants;
pub mod utils;

pub use core::{Config, GeocoderConfig, GeocoderProvider, StoreState};
pub use db::DbService;
pub use db::models::{Restaurant, Review};
pub use geocoding::{GeocodeError, GeocodeMatch, Geocoder, MapQuestGeocoder};
pub use restaurants::{
    NearbyRestaurant, RestaurantService, SaveError, SavePipeline, StoreError, StoreResult,
};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};
