//! Unified error system for the restaurant directory
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified response envelope
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors (validation, not found, conflicts)
//! - 6xxx: Restaurant and review errors
//! - 7xxx: Geocoding errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::with_message(ErrorCode::RequiredField, "Please add a suburb")
//!     .with_detail("field", "suburb");
//!
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(7));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
