//! Nominatim geocoding backend (OpenStreetMap)
//!
//! Uses the free Nominatim API for geocoding.
//! The usage policy requires an identifying User-Agent with a contact
//! address; it is built from [`GeocoderConfig`].

use crate::config::GeocoderConfig;
use crate::constants::api::{RESPONSE_FORMAT, REVERSE_PATH, SEARCH_PATH};
use crate::constants::lookup::{MIN_QUERY_CHARS, REVERSE_ZOOM};
use crate::error::{Error, LookupKind, Result};
use crate::geo::place::{to_candidates, RawPlace};
use crate::geo::{Geocoder, LocationCandidate, LocationDetail};
use crate::locale::Language;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

/// Nominatim geocoding backend
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
    language: Language,
}

impl NominatimClient {
    /// Create a client for the configured service
    pub fn new(config: &GeocoderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language: config.language,
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Language used for results and error messages
    pub fn language(&self) -> Language {
        self.language
    }

    /// Parameters shared by both endpoints
    fn common_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("format", RESPONSE_FORMAT.to_string()),
            ("accept-language", self.language.accept_language()),
            ("addressdetails", "1".to_string()),
            ("extratags", "1".to_string()),
            ("namedetails", "1".to_string()),
        ]
    }

    fn search_params(&self, query: &str, limit: usize) -> Vec<(&'static str, String)> {
        let mut params = self.common_params();
        params.push(("q", query.to_string()));
        params.push(("limit", limit.to_string()));
        params
    }

    fn reverse_params(&self, lat: f64, lon: f64) -> Vec<(&'static str, String)> {
        let mut params = self.common_params();
        params.push(("lat", lat.to_string()));
        params.push(("lon", lon.to_string()));
        params.push(("zoom", REVERSE_ZOOM.to_string()));
        params
    }

    /// Issue one GET and return the raw body text
    async fn get_body(&self, path: &str, params: &[(&'static str, String)]) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?params, "Nominatim request");

        let response = self.client.get(&url).query(params).send().await?;

        if !response.status().is_success() {
            return Err(Error::Geo(format!(
                "Nominatim returned status: {}",
                response.status()
            )));
        }

        Ok(response.text().await?)
    }

    async fn fetch_places(&self, query: &str, limit: usize) -> Result<Vec<RawPlace>> {
        let body = self.get_body(SEARCH_PATH, &self.search_params(query, limit)).await?;
        parse_search_body(&body)
    }

    async fn fetch_reverse(&self, lat: f64, lon: f64) -> Result<Option<RawPlace>> {
        let body = self.get_body(REVERSE_PATH, &self.reverse_params(lat, lon)).await?;
        parse_reverse_body(&body)
    }
}

/// Search responses must be a JSON array; elements that are not places are skipped
fn parse_search_body(body: &str) -> Result<Vec<RawPlace>> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Array(items) = value else {
        return Err(Error::Geo("Malformed upstream response: expected an array".to_string()));
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<RawPlace>(item) {
            Ok(place) => Some(place),
            Err(e) => {
                debug!(error = %e, "Skipping malformed search record");
                None
            }
        })
        .collect())
}

/// Reverse responses: empty, `null` or `{"error": ..}` all mean nothing was found
fn parse_reverse_body(body: &str) -> Result<Option<RawPlace>> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(body)?;
    if value.is_null() {
        return Ok(None);
    }
    if !value.is_object() {
        return Err(Error::Geo("Malformed upstream response: expected an object".to_string()));
    }

    let place: RawPlace = serde_json::from_value(value)?;
    if let Some(reason) = &place.error {
        debug!(%reason, "Nominatim found nothing at point");
        return Ok(None);
    }
    Ok(Some(place))
}

impl Geocoder for NominatimClient {
    async fn search_locations(&self, query: &str, limit: usize) -> Result<Vec<LocationCandidate>> {
        if query.chars().count() < MIN_QUERY_CHARS {
            debug!(query, "Query too short, skipping search");
            return Ok(Vec::new());
        }

        let places = self.fetch_places(query, limit).await.map_err(|e| {
            error!(error = %e, query, "Error searching locations");
            Error::lookup(LookupKind::Search, self.language)
        })?;

        Ok(to_candidates(&places, self.language))
    }

    async fn location_details(&self, lat: f64, lon: f64) -> Result<Option<LocationDetail>> {
        let place = self.fetch_reverse(lat, lon).await.map_err(|e| {
            error!(error = %e, lat, lon, "Error getting location details");
            Error::lookup(LookupKind::Detail, self.language)
        })?;

        Ok(place.map(|place| place.to_detail(self.language, (lat, lon))))
    }
}
