//! MapQuest geocoding client
//!
//! `GET {base_url}/geocoding/v1/address?key=...&location=...`

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::{GeocodeError, GeocodeMatch, Geocoder};
use crate::core::GeocoderConfig;

#[derive(Debug, Deserialize)]
struct MapQuestResponse {
    info: Info,
    #[serde(default)]
    results: Vec<MapQuestResult>,
}

#[derive(Debug, Deserialize)]
struct Info {
    statuscode: i64,
    #[serde(default)]
    messages: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct MapQuestResult {
    #[serde(default)]
    locations: Vec<MapQuestLocation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MapQuestLocation {
    lat_lng: LatLng,
    #[serde(default)]
    street: String,
    /// City
    #[serde(default)]
    admin_area5: String,
    /// State
    #[serde(default)]
    admin_area3: String,
    /// Country
    #[serde(default)]
    admin_area1: String,
    #[serde(default)]
    postal_code: String,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

fn non_empty(s: String) -> Option<String> {
    let s = s.trim().to_string();
    (!s.is_empty()).then_some(s)
}

impl From<MapQuestLocation> for GeocodeMatch {
    fn from(loc: MapQuestLocation) -> Self {
        let street_name = non_empty(loc.street);
        let city = non_empty(loc.admin_area5);
        let state_code = non_empty(loc.admin_area3);
        let zipcode = non_empty(loc.postal_code);
        let country_code = non_empty(loc.admin_area1);

        // "street, city state zip, country"
        let region = [state_code.as_deref(), zipcode.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        let locality = [city.as_deref(), Some(region.as_str())]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let formatted = [
            street_name.as_deref(),
            Some(locality.as_str()),
            country_code.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

        Self {
            longitude: loc.lat_lng.lng,
            latitude: loc.lat_lng.lat,
            formatted_address: non_empty(formatted),
            street_name,
            city,
            state_code,
            zipcode,
            country_code,
        }
    }
}

fn into_matches(response: MapQuestResponse) -> Result<Vec<GeocodeMatch>, GeocodeError> {
    if response.info.statuscode != 0 {
        return Err(GeocodeError::Status {
            status: response.info.statuscode.clamp(0, u16::MAX as i64) as u16,
            message: response.info.messages.join("; "),
        });
    }

    Ok(response
        .results
        .into_iter()
        .flat_map(|r| r.locations)
        .map(GeocodeMatch::from)
        .collect())
}

/// Error for a non-2xx answer. A body that cannot be read is reported in
/// place of the body.
fn status_error<E: std::fmt::Display>(status: u16, body: Result<String, E>) -> GeocodeError {
    let message = body.unwrap_or_else(|e| format!("failed to read error body: {e}"));
    GeocodeError::Status { status, message }
}

/// MapQuest-backed [`Geocoder`]
#[derive(Clone)]
pub struct MapQuestGeocoder {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for MapQuestGeocoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapQuestGeocoder")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl MapQuestGeocoder {
    pub fn new(config: &GeocoderConfig) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl Geocoder for MapQuestGeocoder {
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeMatch>, GeocodeError> {
        let url = format!("{}/geocoding/v1/address", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("location", address)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status.as_u16(), response.text().await));
        }

        let body: MapQuestResponse = response.json().await?;
        let matches = into_matches(body)?;
        tracing::debug!(address, candidates = matches.len(), "MapQuest geocode");
        Ok(matches)
    }
}
