//! Unified error codes for the restaurant directory
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Restaurant and review errors
//! - 7xxx: Geocoding errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 6xxx: Restaurant ====================
    /// Restaurant not found
    RestaurantNotFound = 6001,
    /// A restaurant with the same name already exists in the suburb
    RestaurantAlreadyExists = 6002,
    /// Reviews could not be removed together with their restaurant
    CascadeDeleteFailed = 6003,
    /// Review rating outside 1..=5
    ReviewInvalidRating = 6502,

    // ==================== 7xxx: Geocoding ====================
    /// Geocoding service unreachable or rejected the request
    GeocodingFailed = 7001,
    /// Geocoding service returned no candidates
    AddressNotFound = 7002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Whether a caller may retry the same request unchanged
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorCode::GeocodingFailed
                | ErrorCode::AddressNotFound
                | ErrorCode::CascadeDeleteFailed
        )
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Restaurant
            ErrorCode::RestaurantNotFound => "Restaurant not found",
            ErrorCode::RestaurantAlreadyExists => {
                "A restaurant with this name already exists in the suburb"
            }
            ErrorCode::CascadeDeleteFailed => "Failed to delete restaurant reviews",
            ErrorCode::ReviewInvalidRating => "Rating must be between 1 and 5",

            // Geocoding
            ErrorCode::GeocodingFailed => "Geocoding service request failed",
            ErrorCode::AddressNotFound => "Address could not be located",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Restaurant
            6001 => Ok(ErrorCode::RestaurantNotFound),
            6002 => Ok(ErrorCode::RestaurantAlreadyExists),
            6003 => Ok(ErrorCode::CascadeDeleteFailed),
            6502 => Ok(ErrorCode::ReviewInvalidRating),

            // Geocoding
            7001 => Ok(ErrorCode::GeocodingFailed),
            7002 => Ok(ErrorCode::AddressNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
