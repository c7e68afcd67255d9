//! Shared types for the restaurant directory
//!
//! Payload types and the unified error system used by `restaurant-store`
//! and by whatever API layer sits in front of it.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
