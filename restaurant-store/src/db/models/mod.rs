//! Database Models

pub mod restaurant;
pub mod review;

// Re-exports
pub use restaurant::{Restaurant, RestaurantId, dedup_staff};
pub use review::Review;
