//! Slug derivation

/// Lower-case, URL-safe slug of a restaurant name. Not unique.
pub fn slug_for(name: &str) -> String {
    slug::slugify(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_is_lowercase_and_url_safe() {
        let s = slug_for("Joe's Diner");
        assert_eq!(s, "joe-s-diner");
        assert!(s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn test_slug_is_deterministic() {
        assert_eq!(slug_for("Grilled BURGER House"), slug_for("Grilled BURGER House"));
        assert_eq!(slug_for("Grilled BURGER House"), "grilled-burger-house");
    }
}
