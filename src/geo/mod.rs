//! Geocoding module
//!
//! Forward search (place name to candidate coordinates), reverse lookup
//! (coordinates to place), and the offline popular-cities list.

pub mod cities;
pub mod name;
pub mod nominatim;
pub mod place;

pub use cities::{popular_cities, PopularCity};
pub use name::resolve_name;
pub use nominatim::NominatimClient;

use crate::config::GeocoderConfig;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A forward-search match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCandidate {
    /// Upstream place identifier, opaque
    pub id: Option<PlaceId>,
    /// Short display name
    pub name: String,
    /// Full upstream display string
    pub full_name: String,
    pub lat: f64,
    pub lon: f64,
    /// Upstream place classification
    #[serde(rename = "type")]
    pub place_type: String,
    /// Upstream relevance score
    pub importance: f64,
}

/// Place identifier as sent upstream
///
/// Nominatim sends integers; compatible services (LocationIQ) send strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaceId {
    Number(u64),
    Text(String),
}

impl From<u64> for PlaceId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for PlaceId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// The place found at a coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDetail {
    pub name: String,
    pub full_name: String,
    pub lat: f64,
    pub lon: f64,
    /// Structured address exactly as supplied upstream
    pub address: Option<Map<String, Value>>,
    #[serde(rename = "type")]
    pub place_type: String,
}

/// Trait for geocoding backends
pub trait Geocoder: Send + Sync + 'static {
    /// Search for places matching a free-text query
    ///
    /// Returns an empty list for queries too short to be meaningful.
    fn search_locations(
        &self,
        query: &str,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Vec<LocationCandidate>>> + Send;

    /// Describe the place at a coordinate, or None if nothing is there
    fn location_details(
        &self,
        lat: f64,
        lon: f64,
    ) -> impl std::future::Future<Output = Result<Option<LocationDetail>>> + Send;
}

/// Build the default geocoding backend from configuration
pub fn get_geocoder(config: &GeocoderConfig) -> Result<NominatimClient> {
    NominatimClient::new(config)
}
