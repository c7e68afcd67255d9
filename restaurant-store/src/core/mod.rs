//! Core: configuration and store state

pub mod config;
pub mod state;

pub use config::{Config, GeocoderConfig, GeocoderProvider};
pub use state::StoreState;
