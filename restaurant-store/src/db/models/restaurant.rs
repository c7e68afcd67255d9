//! Restaurant Model

use serde::{Deserialize, Serialize};
use shared::models::GeoLocation;
use surrealdb::RecordId;

pub type RestaurantId = RecordId;

/// Restaurant record as stored in the `restaurant` table
///
/// `staff`, `geocoded_address` and `created_at` are omitted by default reads;
/// they are only populated by the `*_full` repository queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RestaurantId>,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Only present between submission and geocoding; never persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// User references, unique membership
    #[serde(default)]
    pub staff: Vec<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
    /// Address text the current `location` was resolved from. Re-saves
    /// geocode this again; omitted by default reads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geocoded_address: Option<String>,
    pub suburb: String,
    #[serde(default)]
    pub cuisine: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_cover: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub menu: Vec<String>,
    #[serde(default)]
    pub ratings_average: f64,
    #[serde(default)]
    pub ratings_quantity: i64,
    #[serde(default)]
    pub delivery: bool,
    #[serde(default)]
    pub takeaway: bool,
    #[serde(default)]
    pub cash_only: bool,
    #[serde(default)]
    pub wheelchair_accessible: bool,
    /// Unix millis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl Restaurant {
    pub fn new(name: impl Into<String>, suburb: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            slug: String::new(),
            description: None,
            website: None,
            phone: None,
            address: None,
            staff: Vec::new(),
            location: None,
            geocoded_address: None,
            suburb: suburb.into(),
            cuisine: Vec::new(),
            image_cover: None,
            images: Vec::new(),
            menu: Vec::new(),
            ratings_average: 0.0,
            ratings_quantity: 0,
            delivery: false,
            takeaway: false,
            cash_only: false,
            wheelchair_accessible: false,
            created_at: None,
        }
    }

    /// `"restaurant:key"` form of the id, if persisted
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_string())
    }
}

/// Push `ids` into `staff` keeping first-seen order and dropping repeats
pub fn dedup_staff(ids: impl IntoIterator<Item = RecordId>) -> Vec<RecordId> {
    let mut staff: Vec<RecordId> = Vec::new();
    for id in ids {
        if !staff.contains(&id) {
            staff.push(id);
        }
    }
    staff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_defaults() {
        let r = Restaurant::new("Joe's Diner", "Bondi");
        assert_eq!(r.ratings_average, 0.0);
        assert_eq!(r.ratings_quantity, 0);
        assert!(!r.delivery && !r.takeaway && !r.cash_only && !r.wheelchair_accessible);
        assert!(r.location.is_none());
        assert!(r.id_string().is_none());
    }

    #[test]
    fn test_dedup_staff_keeps_first_seen_order() {
        let a = RecordId::from_table_key("user", "a");
        let b = RecordId::from_table_key("user", "b");
        let staff = dedup_staff([a.clone(), b.clone(), a.clone()]);
        assert_eq!(staff, vec![a, b]);
    }

    #[test]
    fn test_address_is_not_serialized_when_cleared() {
        let r = Restaurant::new("Joe's Diner", "Bondi");
        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("address").is_none());
        assert!(json.get("id").is_none());
        assert!(json.get("created_at").is_none());
    }
}
