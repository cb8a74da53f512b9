//! Server shared state
//!
//! Holds configuration and the geocoding backend shared by all handlers.

use crate::config::Config;
use crate::geo::Geocoder;

/// Shared state for the HTTP server
pub struct AppState<G> {
    /// Configuration
    pub config: Config,

    /// Geocoding backend
    pub geocoder: G,
}

impl<G: Geocoder> AppState<G> {
    /// Create new application state
    pub fn new(config: Config, geocoder: G) -> Self {
        Self { config, geocoder }
    }

    /// Default search limit from configuration
    pub fn default_limit(&self) -> usize {
        self.config.search.limit
    }
}
