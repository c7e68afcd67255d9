//! Text normalization applied on every save

fn capitalize(word: &str, lower_rest: bool) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str();
            let mut out: String = first.to_uppercase().collect();
            if lower_rest {
                out.push_str(&rest.to_lowercase());
            } else {
                out.push_str(rest);
            }
            out
        }
        None => String::new(),
    }
}

/// "grilled BURGER house" -> "Grilled BURGER House"
pub fn name_case(name: &str) -> String {
    name.split(' ')
        .map(|w| capitalize(w, false))
        .collect::<Vec<_>>()
        .join(" ")
}

/// "BONDI beach" -> "Bondi Beach"
pub fn suburb_case(suburb: &str) -> String {
    suburb
        .split(' ')
        .map(|w| capitalize(w, true))
        .collect::<Vec<_>>()
        .join(" ")
}

/// "ITALIAN" -> "Italian", "middle EASTERN" -> "Middle eastern"
pub fn cuisine_case(entry: &str) -> String {
    capitalize(entry, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_keeps_rest_of_word() {
        assert_eq!(name_case("grilled BURGER house"), "Grilled BURGER House");
        assert_eq!(name_case("joe's diner"), "Joe's Diner");
    }

    #[test]
    fn test_suburb_lowers_rest_of_word() {
        assert_eq!(suburb_case("BONDI beach"), "Bondi Beach");
        assert_eq!(suburb_case("surry HILLS"), "Surry Hills");
    }

    #[test]
    fn test_cuisine_applies_to_whole_entry() {
        let cuisine: Vec<String> = ["ITALIAN", "thai", "middle EASTERN"]
            .iter()
            .map(|c| cuisine_case(c))
            .collect();
        assert_eq!(cuisine, vec!["Italian", "Thai", "Middle eastern"]);
    }

    #[test]
    fn test_repeated_spaces_survive() {
        assert_eq!(name_case("a  b"), "A  B");
        assert_eq!(suburb_case(""), "");
    }

    #[test]
    fn test_non_ascii_first_char() {
        assert_eq!(suburb_case("élysée"), "Élysée");
    }
}
