//! Restaurant Model

use serde::{Deserialize, Serialize};

/// GeoJSON geometry tag. Only points are stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeoType {
    #[default]
    Point,
}

/// Geocoded location: a GeoJSON point plus the address parts the geocoder
/// resolved for it
///
/// Unresolved parts serialize as `null` so the stored object never reduces to
/// a bare `{type, coordinates}` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    #[serde(rename = "type", default)]
    pub geo_type: GeoType,
    /// `[longitude, latitude]`, GeoJSON order
    pub coordinates: [f64; 2],
    pub formatted_address: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    /// State code, e.g. "NSW"
    pub state: Option<String>,
    pub zipcode: Option<String>,
    /// Country code, e.g. "AU"
    pub country: Option<String>,
}

impl GeoLocation {
    pub fn point(longitude: f64, latitude: f64) -> Self {
        Self {
            geo_type: GeoType::Point,
            coordinates: [longitude, latitude],
            formatted_address: None,
            street: None,
            city: None,
            state: None,
            zipcode: None,
            country: None,
        }
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Create restaurant payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    /// Free-form postal address; replaced by `location` once geocoded
    pub address: String,
    /// User ids ("user:xxx" or bare key)
    #[serde(default)]
    pub staff: Vec<String>,
    pub suburb: String,
    #[serde(default)]
    pub cuisine: Vec<String>,
    pub image_cover: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub menu: Vec<String>,
    pub delivery: Option<bool>,
    pub takeaway: Option<bool>,
    pub cash_only: Option<bool>,
    pub wheelchair_accessible: Option<bool>,
}

/// Update restaurant payload
///
/// Absent fields keep their stored value. Supplying `address` relocates the
/// restaurant; without it the stored location is geocoded again.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suburb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_cover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub takeaway: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wheelchair_accessible: Option<bool>,
}

/// Rating aggregate written by the review aggregation process
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub ratings_average: f64,
    pub ratings_quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_serializes_as_geojson_point() {
        let mut location = GeoLocation::point(151.2743, -33.8915);
        location.city = Some("Bondi Beach".to_string());

        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json["type"], "Point");
        assert_eq!(json["coordinates"][0], 151.2743);
        assert_eq!(json["coordinates"][1], -33.8915);
        assert_eq!(json["city"], "Bondi Beach");
        assert!(json["street"].is_null());
    }

    #[test]
    fn test_create_payload_defaults() {
        let json = r#"{"name":"Joe's Diner","address":"1 Campbell Pde","suburb":"bondi"}"#;
        let create: RestaurantCreate = serde_json::from_str(json).unwrap();
        assert!(create.cuisine.is_empty());
        assert!(create.staff.is_empty());
        assert!(create.delivery.is_none());
    }
}
