//! Input validation helpers
//!
//! Centralized text length constants and field validation functions.
//! Lengths are counted in characters, not bytes.

use serde::Serialize;
use shared::{AppError, ErrorCode};
use std::fmt;

// ── Text length limits ──────────────────────────────────────────────

/// Restaurant display names
pub const MAX_NAME_LEN: usize = 30;

/// Descriptions, review bodies
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone numbers, review titles
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Field errors ────────────────────────────────────────────────────

/// The rule a field violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Required,
    MaxLength,
    Range,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::MaxLength => "max_length",
            Rule::Range => "range",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rejected field
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: &'static str,
    pub rule: Rule,
    pub message: String,
}

impl FieldError {
    pub fn required(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            rule: Rule::Required,
            message: message.into(),
        }
    }

    pub fn too_long(field: &'static str, len: usize, max_len: usize) -> Self {
        Self {
            field,
            rule: Rule::MaxLength,
            message: format!("{field} is too long ({len} chars, max {max_len})"),
        }
    }

    pub fn out_of_range(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            rule: Rule::Range,
            message: message.into(),
        }
    }
}

impl From<FieldError> for AppError {
    fn from(err: FieldError) -> Self {
        let code = match err.rule {
            Rule::Required => ErrorCode::RequiredField,
            Rule::MaxLength | Rule::Range => ErrorCode::ValueOutOfRange,
        };
        AppError::with_message(code, err.message)
            .with_detail("field", err.field)
            .with_detail("rule", err.rule.as_str())
    }
}

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
///
/// `missing` is the message reported when the value is blank.
pub fn validate_required_text(
    value: &str,
    field: &'static str,
    max_len: usize,
    missing: &str,
) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::required(field, missing));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(FieldError::too_long(field, len, max_len));
    }
    Ok(())
}

/// Validate that a required string is non-empty, with no length limit.
pub fn validate_not_blank(value: &str, field: &'static str, missing: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::required(field, missing));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &'static str,
    max_len: usize,
) -> Result<(), FieldError> {
    if let Some(v) = value {
        let len = v.chars().count();
        if len > max_len {
            return Err(FieldError::too_long(field, len, max_len));
        }
    }
    Ok(())
}

/// Validate that every entry of a list is within the length limit.
pub fn validate_text_list(
    values: &[String],
    field: &'static str,
    max_len: usize,
) -> Result<(), FieldError> {
    for v in values {
        let len = v.chars().count();
        if len > max_len {
            return Err(FieldError::too_long(field, len, max_len));
        }
    }
    Ok(())
}

/// Trim an optional string, collapsing blank values to `None`.
pub fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_blank() {
        let err = validate_required_text("   ", "name", MAX_NAME_LEN, "Please add a name")
            .unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.rule, Rule::Required);
        assert_eq!(err.message, "Please add a name");
    }

    #[test]
    fn test_required_text_counts_chars() {
        // 30 multi-byte chars is within the limit
        let name = "é".repeat(30);
        assert!(validate_required_text(&name, "name", MAX_NAME_LEN, "x").is_ok());

        let name = "a".repeat(31);
        let err = validate_required_text(&name, "name", MAX_NAME_LEN, "x").unwrap_err();
        assert_eq!(err.rule, Rule::MaxLength);
    }

    #[test]
    fn test_not_blank_has_no_length_limit() {
        assert!(validate_not_blank(&"a".repeat(1000), "suburb", "x").is_ok());
        let err = validate_not_blank(" ", "suburb", "Please add a suburb").unwrap_err();
        assert_eq!(err.rule, Rule::Required);
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "phone", MAX_SHORT_TEXT_LEN).is_ok());
        let long = Some("9".repeat(MAX_SHORT_TEXT_LEN + 1));
        assert!(validate_optional_text(&long, "phone", MAX_SHORT_TEXT_LEN).is_err());
    }

    #[test]
    fn test_field_error_into_app_error() {
        let err: AppError = FieldError::required("suburb", "Please add a suburb").into();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.detail_str("field"), Some("suburb"));
        assert_eq!(err.detail_str("rule"), Some("required"));

        let err: AppError = FieldError::too_long("name", 31, 30).into();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.detail_str("rule"), Some("max_length"));
    }

    #[test]
    fn test_trim_optional() {
        assert_eq!(trim_optional(Some("  hi ".into())), Some("hi".into()));
        assert_eq!(trim_optional(Some("   ".into())), None);
        assert_eq!(trim_optional(None), None);
    }
}
