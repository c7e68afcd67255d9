//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::NotFound | Self::RestaurantNotFound => StatusCode::NOT_FOUND,

            Self::AlreadyExists | Self::RestaurantAlreadyExists => StatusCode::CONFLICT,

            Self::ValidationFailed
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::ReviewInvalidRating => StatusCode::BAD_REQUEST,

            // Upstream geocoder problems
            Self::GeocodingFailed => StatusCode::BAD_GATEWAY,
            Self::AddressNotFound => StatusCode::UNPROCESSABLE_ENTITY,

            Self::CascadeDeleteFailed
            | Self::InternalError
            | Self::DatabaseError
            | Self::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
