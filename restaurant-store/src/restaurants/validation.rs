//! Restaurant and review input checks
//!
//! Inputs are trimmed first; the checks run on the trimmed values.

use crate::db::models::Restaurant;
use crate::utils::FieldError;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, trim_optional,
    validate_not_blank, validate_optional_text, validate_required_text, validate_text_list,
};
use shared::models::ReviewCreate;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Trim every text field, dropping blank optional values and blank list entries
pub fn trim_restaurant(mut r: Restaurant) -> Restaurant {
    r.name = r.name.trim().to_string();
    r.suburb = r.suburb.trim().to_string();
    r.address = trim_optional(r.address);
    r.description = trim_optional(r.description);
    r.website = trim_optional(r.website);
    r.phone = trim_optional(r.phone);
    r.image_cover = trim_optional(r.image_cover);
    r.cuisine = trim_list(r.cuisine);
    r.images = trim_list(r.images);
    r.menu = trim_list(r.menu);
    r
}

fn trim_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Check a trimmed candidate before it enters the save pipeline
///
/// `address` is only required when the record has no resolved location to
/// fall back on.
pub fn validate_restaurant(r: &Restaurant) -> Result<(), FieldError> {
    validate_required_text(&r.name, "name", MAX_NAME_LEN, "Please add a name")?;

    match &r.address {
        Some(address) => validate_not_blank(address, "address", "Please add an address")?,
        None => {
            let resolved = r
                .geocoded_address
                .as_deref()
                .or_else(|| r.location.as_ref().and_then(|l| l.formatted_address.as_deref()))
                .is_some_and(|a| !a.trim().is_empty());
            if !resolved {
                return Err(FieldError::required("address", "Please add an address"));
            }
        }
    }

    validate_not_blank(&r.suburb, "suburb", "Please add a suburb")?;

    if r.cuisine.is_empty() {
        return Err(FieldError::required("cuisine", "Please add a cuisine"));
    }

    validate_optional_text(&r.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&r.website, "website", MAX_URL_LEN)?;
    validate_optional_text(&r.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&r.image_cover, "image_cover", MAX_URL_LEN)?;
    validate_text_list(&r.images, "images", MAX_URL_LEN)?;
    validate_text_list(&r.menu, "menu", MAX_URL_LEN)?;
    Ok(())
}

/// Trim and check a review payload's text fields
pub fn validate_review(mut input: ReviewCreate) -> Result<ReviewCreate, FieldError> {
    input.title = input.title.trim().to_string();
    input.text = trim_optional(input.text);

    validate_required_text(&input.title, "title", MAX_SHORT_TEXT_LEN, "Please add a title")?;
    validate_optional_text(&input.text, "text", MAX_NOTE_LEN)?;
    Ok(input)
}

pub fn validate_rating(rating: u8) -> Result<(), FieldError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(FieldError::out_of_range(
            "rating",
            format!("Rating must be between {MIN_RATING} and {MAX_RATING}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Rule;
    use shared::models::GeoLocation;

    fn valid() -> Restaurant {
        let mut r = Restaurant::new("Joe's Diner", "Bondi");
        r.address = Some("1 Campbell Pde".into());
        r.cuisine = vec!["Diner".into()];
        r
    }

    #[test]
    fn test_valid_restaurant() {
        assert!(validate_restaurant(&valid()).is_ok());
    }

    #[test]
    fn test_name_too_long() {
        let mut r = valid();
        r.name = "x".repeat(31);
        let err = validate_restaurant(&r).unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.rule, Rule::MaxLength);
    }

    #[test]
    fn test_only_name_is_length_capped() {
        let mut r = valid();
        r.suburb = "a".repeat(101);
        r.cuisine = vec!["x".repeat(101)];
        r.address = Some("1 ".repeat(400));
        assert!(validate_restaurant(&r).is_ok());
    }

    #[test]
    fn test_name_trimmed_before_length_check() {
        let mut r = valid();
        r.name = format!("  {}  ", "x".repeat(30));
        assert!(validate_restaurant(&trim_restaurant(r)).is_ok());
    }

    #[test]
    fn test_blank_fields_rejected() {
        let mut r = valid();
        r.suburb = "   ".into();
        assert_eq!(validate_restaurant(&trim_restaurant(r)).unwrap_err().field, "suburb");

        let mut r = valid();
        r.cuisine = vec!["  ".into()];
        assert_eq!(validate_restaurant(&trim_restaurant(r)).unwrap_err().field, "cuisine");

        let mut r = valid();
        r.address = Some(" ".into());
        assert_eq!(validate_restaurant(&trim_restaurant(r)).unwrap_err().field, "address");
    }

    #[test]
    fn test_address_optional_once_located() {
        let mut r = valid();
        r.address = None;
        assert!(validate_restaurant(&r).is_err());

        let mut location = GeoLocation::point(151.27, -33.89);
        location.formatted_address = Some("1 Campbell Pde, Bondi Beach".into());
        r.location = Some(location);
        assert!(validate_restaurant(&r).is_ok());

        // A location without a formatted address still re-saves from the
        // stored query
        r.location = Some(GeoLocation::point(151.27, -33.89));
        assert!(validate_restaurant(&r).is_err());
        r.geocoded_address = Some("1 Campbell Pde".into());
        assert!(validate_restaurant(&r).is_ok());
    }

    #[test]
    fn test_review_checks() {
        let review = |rating| ReviewCreate {
            restaurant: "restaurant:a".into(),
            user: None,
            title: " Great ".into(),
            text: None,
            rating,
        };
        assert_eq!(validate_review(review(5)).unwrap().title, "Great");
        assert!(validate_rating(1).is_ok() && validate_rating(5).is_ok());
        assert_eq!(validate_rating(0).unwrap_err().rule, Rule::Range);
        assert_eq!(validate_rating(6).unwrap_err().field, "rating");

        let mut blank = review(3);
        blank.title = "  ".into();
        assert_eq!(validate_review(blank).unwrap_err().field, "title");
    }
}
