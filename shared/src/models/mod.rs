//! Data models
//!
//! Payload types shared between the store and any API layer in front of it.
//! Database row types live next to their repositories in `restaurant-store`.

pub mod restaurant;
pub mod review;

// Re-exports
pub use restaurant::*;
pub use review::*;
