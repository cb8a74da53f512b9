//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::api::NOMINATIM_URL;
use crate::constants::lookup::DEFAULT_LIMIT;

/// Default upstream geocoding service
pub const DEFAULT_BASE_URL: &str = NOMINATIM_URL;

/// Application identifier sent in the User-Agent header
pub const DEFAULT_APP_NAME: &str = "ForeskyWeatherApp/1.0";

/// Contact address sent alongside the application identifier
pub const DEFAULT_CONTACT: &str = "foresky@example.com";

/// Request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Default primary language
pub const DEFAULT_LANGUAGE: &str = "id";

/// Default number of search results
pub const DEFAULT_SEARCH_LIMIT: usize = DEFAULT_LIMIT;

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7879;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "foresky-geo";
