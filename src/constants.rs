//! Centralized constants for the foresky-geo crate

/// External API endpoints
pub mod api {
    /// OpenStreetMap Nominatim geocoding API
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

    /// Forward geocoding path
    pub const SEARCH_PATH: &str = "/search";

    /// Reverse geocoding path
    pub const REVERSE_PATH: &str = "/reverse";

    /// Response format requested from Nominatim
    pub const RESPONSE_FORMAT: &str = "json";
}

/// Lookup behaviour
pub mod lookup {
    /// Queries shorter than this (in characters) never reach the network
    pub const MIN_QUERY_CHARS: usize = 2;

    /// Default number of search results
    pub const DEFAULT_LIMIT: usize = 5;

    /// Upper bound Nominatim accepts for `limit`
    pub const MAX_LIMIT: usize = 40;

    /// Reverse lookup zoom: city/district granularity
    pub const REVERSE_ZOOM: u8 = 10;

    /// Place type used when upstream does not classify a record
    pub const UNKNOWN_TYPE: &str = "unknown";

    /// Address fields scanned for a display name, most specific first
    pub const ADDRESS_NAME_FIELDS: [&str; 9] = [
        "city",
        "town",
        "village",
        "suburb",
        "neighbourhood",
        "county",
        "state_district",
        "state",
        "region",
    ];
}
