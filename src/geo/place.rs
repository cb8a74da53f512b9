//! Raw Nominatim records and their mapping into normalized locations

use crate::constants::lookup::UNKNOWN_TYPE;
use crate::geo::name::resolve_name;
use crate::geo::{LocationCandidate, LocationDetail, PlaceId};
use crate::locale::Language;
use serde::Deserialize;
use serde_json::{Map, Value};

/// One record as returned by `/search` (array element) or `/reverse`
///
/// Every field is optional; absence is modelled explicitly rather than
/// through falsy values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlace {
    #[serde(default)]
    pub place_id: Option<PlaceId>,
    #[serde(default)]
    pub lat: Option<CoordField>,
    #[serde(default)]
    pub lon: Option<CoordField>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(rename = "type", default)]
    pub place_type: Option<String>,
    #[serde(default)]
    pub importance: Option<f64>,
    #[serde(default)]
    pub address: Option<Map<String, Value>>,
    #[serde(default)]
    pub namedetails: Option<Map<String, Value>>,
    #[serde(default)]
    pub extratags: Option<Map<String, Value>>,
    /// Set by `/reverse` when nothing was found at the point
    #[serde(default)]
    pub error: Option<String>,
}

/// Coordinate as sent upstream: Nominatim uses strings, numbers are accepted too
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CoordField {
    Number(f64),
    Text(String),
}

impl CoordField {
    /// The numeric value, if it parses to a finite number
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl RawPlace {
    /// Latitude and longitude, only when both are present and numeric
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = self.lat.as_ref()?.value()?;
        let lon = self.lon.as_ref()?.value()?;
        Some((lat, lon))
    }

    /// `type`, else the `place` extra tag, else the unknown sentinel
    fn type_or_unknown(&self) -> String {
        self.place_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| {
                self.extratags
                    .as_ref()?
                    .get("place")?
                    .as_str()
                    .filter(|t| !t.is_empty())
            })
            .unwrap_or(UNKNOWN_TYPE)
            .to_string()
    }

    /// Map a search result; `None` when the record has no usable coordinates
    pub fn to_candidate(&self, language: Language) -> Option<LocationCandidate> {
        let (lat, lon) = self.coordinates()?;
        Some(LocationCandidate {
            id: self.place_id.clone(),
            name: resolve_name(self, language),
            full_name: self.display_name.clone().unwrap_or_default(),
            lat,
            lon,
            place_type: self.type_or_unknown(),
            importance: self.importance.unwrap_or(0.0),
        })
    }

    /// Map a reverse result, falling back to the queried point for missing coordinates
    pub fn to_detail(&self, language: Language, queried: (f64, f64)) -> LocationDetail {
        let (lat, lon) = self.coordinates().unwrap_or(queried);
        LocationDetail {
            name: resolve_name(self, language),
            full_name: self.display_name.clone().unwrap_or_default(),
            lat,
            lon,
            address: self.address.clone(),
            place_type: self.type_or_unknown(),
        }
    }
}

/// Keep records with coordinates, then map them, preserving upstream order
pub fn to_candidates(places: &[RawPlace], language: Language) -> Vec<LocationCandidate> {
    places
        .iter()
        .filter(|place| place.coordinates().is_some())
        .filter_map(|place| place.to_candidate(language))
        .collect()
}
