//! Utilities: errors, logging, validation, time and distance helpers

pub mod geo;
pub mod logger;
pub mod time;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use validation::{FieldError, Rule};
