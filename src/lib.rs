//! foresky-geo: location lookup for the Foresky weather app
//!
//! A thin client over the OpenStreetMap Nominatim service.
//!
//! ## Features
//!
//! - Forward search: place name to candidate coordinates
//! - Reverse lookup: coordinates to a place description
//! - Offline list of popular cities
//! - Coordinate validation
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use foresky_geo::config::GeocoderConfig;
//! use foresky_geo::geo::{Geocoder, NominatimClient};
//!
//! # async fn demo() -> foresky_geo::Result<()> {
//! let geocoder = NominatimClient::new(&GeocoderConfig::default())?;
//!
//! for candidate in geocoder.search_locations("Bandung", 5).await? {
//!     println!("{} ({}, {})", candidate.name, candidate.lat, candidate.lon);
//! }
//!
//! if let Some(place) = geocoder.location_details(-6.2088, 106.8456).await? {
//!     println!("You are in {}", place.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod geo;
pub mod locale;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use coord::{is_valid_coordinate, Coordinates};
pub use error::{Error, LookupKind, Result};
pub use geo::{
    popular_cities, Geocoder, LocationCandidate, LocationDetail, NominatimClient, PlaceId, PopularCity,
};
pub use locale::Language;
