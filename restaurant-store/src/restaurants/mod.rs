//! Restaurant lifecycle: normalization, slugs, the save pipeline and the
//! service that ties them to storage.

pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod service;
pub mod slug;
pub mod validation;

pub use error::{StoreError, StoreResult};
pub use pipeline::{SaveError, SavePipeline, SaveStep};
pub use service::{NearbyRestaurant, RestaurantService};
