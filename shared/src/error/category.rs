//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 6xxx: Restaurant errors
/// - 7xxx: Geocoding errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Restaurant and review errors (6xxx)
    Restaurant,
    /// Geocoding errors (7xxx)
    Geocoding,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            6000..7000 => Self::Restaurant,
            7000..8000 => Self::Geocoding,
            9000.. => Self::System,
            _ => Self::General,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Restaurant => "restaurant",
            Self::Geocoding => "geocoding",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(8), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Restaurant);
        assert_eq!(ErrorCategory::from_code(6502), ErrorCategory::Restaurant);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::Geocoding);
        assert_eq!(ErrorCategory::from_code(9002), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::RequiredField.category(), ErrorCategory::General);
        assert_eq!(
            ErrorCode::CascadeDeleteFailed.category(),
            ErrorCategory::Restaurant
        );
        assert_eq!(
            ErrorCode::AddressNotFound.category(),
            ErrorCategory::Geocoding
        );
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Geocoding).unwrap();
        assert_eq!(json, "\"geocoding\"");

        let category: ErrorCategory = serde_json::from_str("\"restaurant\"").unwrap();
        assert_eq!(category, ErrorCategory::Restaurant);
    }
}
