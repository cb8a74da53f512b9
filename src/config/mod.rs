//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/foresky-geo/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use crate::locale::Language;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Upstream geocoding service settings
    #[serde(default)]
    pub geocoder: GeocoderConfig,

    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,

    /// CLI output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Upstream geocoding service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// Base URL of the Nominatim-compatible service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Application identifier for the User-Agent header
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Contact address required by the service's usage policy
    #[serde(default = "default_contact")]
    pub contact: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Primary language for results and messages
    #[serde(default = "default_language")]
    pub language: Language,
}

/// Search defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of results per search
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

/// CLI output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions for serde
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}
fn default_contact() -> String {
    DEFAULT_CONTACT.to_string()
}
fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}
fn default_language() -> Language {
    DEFAULT_LANGUAGE.parse().unwrap_or_default()
}
fn default_search_limit() -> usize {
    DEFAULT_SEARCH_LIMIT
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            app_name: default_app_name(),
            contact: default_contact(),
            timeout_ms: default_timeout_ms(),
            language: default_language(),
        }
    }
}

impl GeocoderConfig {
    /// Identifying User-Agent: application name plus contact address
    pub fn user_agent(&self) -> String {
        format!("{} ({})", self.app_name, self.contact)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_search_limit(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path)?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(&path, content)?;
        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["geocoder", "base_url"] => Some(self.geocoder.base_url.clone()),
            ["geocoder", "app_name"] => Some(self.geocoder.app_name.clone()),
            ["geocoder", "contact"] => Some(self.geocoder.contact.clone()),
            ["geocoder", "timeout_ms"] => Some(self.geocoder.timeout_ms.to_string()),
            ["geocoder", "language"] => Some(self.geocoder.language.to_string()),

            ["search", "limit"] => Some(self.search.limit.to_string()),

            ["output", "format"] => Some(self.output.format.clone()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["geocoder", "base_url"] => {
                self.geocoder.base_url = value.to_string();
            }
            ["geocoder", "app_name"] => {
                self.geocoder.app_name = value.to_string();
            }
            ["geocoder", "contact"] => {
                self.geocoder.contact = value.to_string();
            }
            ["geocoder", "timeout_ms"] => {
                self.geocoder.timeout_ms = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid timeout value: {}", value))
                })?;
            }
            ["geocoder", "language"] => {
                self.geocoder.language = value.parse().map_err(Error::Config)?;
            }

            ["search", "limit"] => {
                let limit: usize = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid limit value: {}", value))
                })?;
                if limit == 0 {
                    return Err(Error::Config("Limit must be at least 1".to_string()));
                }
                self.search.limit = limit;
            }

            ["output", "format"] => {
                self.output.format = value.to_string();
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid port value: {}", value))
                })?;
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "geocoder.base_url",
            "geocoder.app_name",
            "geocoder.contact",
            "geocoder.timeout_ms",
            "geocoder.language",
            "search.limit",
            "output.format",
            "server.host",
            "server.port",
        ]
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Tests that repoint XDG_CONFIG_HOME must not interleave
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_temp_config<F: FnOnce()>(f: F) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let temp_dir = TempDir::new().unwrap();
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        f();
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.geocoder.base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.geocoder.timeout_ms, 5000);
        assert_eq!(config.geocoder.language, Language::Indonesian);
        assert_eq!(config.search.limit, 5);
        assert_eq!(config.server.port, 7879);
    }

    #[test]
    fn test_user_agent() {
        let config = GeocoderConfig::default();
        assert_eq!(
            config.user_agent(),
            "ForeskyWeatherApp/1.0 (foresky@example.com)"
        );
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(config.get("geocoder.language"), Some("id".to_string()));

        config.set("geocoder.language", "en").unwrap();
        assert_eq!(config.get("geocoder.language"), Some("en".to_string()));
        assert_eq!(config.geocoder.language, Language::English);

        config.set("search.limit", "10").unwrap();
        assert_eq!(config.search.limit, 10);

        config.set("geocoder.base_url", "http://localhost:8080").unwrap();
        assert_eq!(
            config.get("geocoder.base_url"),
            Some("http://localhost:8080".to_string())
        );
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        assert!(config.set("invalid.key", "value").is_err());
    }

    #[test]
    fn test_set_invalid_value() {
        let mut config = Config::default();
        assert!(config.set("geocoder.timeout_ms", "soon").is_err());
        assert!(config.set("geocoder.language", "klingon").is_err());
        assert!(config.set("search.limit", "0").is_err());
        assert_eq!(config.search.limit, 5);
    }

    #[test]
    fn test_save_and_load() {
        with_temp_config(|| {
            let mut config = Config::default();
            config.geocoder.language = Language::English;
            config.search.limit = 8;
            config.save().unwrap();

            let loaded = Config::load().unwrap();
            assert_eq!(loaded.geocoder.language, Language::English);
            assert_eq!(loaded.search.limit, 8);
        });
    }

    #[test]
    fn test_unwritable_config_dir_is_io_error() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        env::set_var("XDG_CONFIG_HOME", &blocker);

        assert!(matches!(Config::default().save(), Err(Error::Io(_))));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let loaded: Config = toml::from_str("[geocoder]\ntimeout_ms = 1500\n").unwrap();
        assert_eq!(loaded.geocoder.timeout_ms, 1500);
        assert_eq!(loaded.geocoder.app_name, DEFAULT_APP_NAME);
        assert_eq!(loaded.search.limit, 5);
    }

    #[test]
    fn test_serialization_format() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();

        assert!(toml.contains("[geocoder]"));
        assert!(toml.contains("[search]"));
        assert!(toml.contains("[server]"));
        assert!(toml.contains("language = \"id\""));
    }

    #[test]
    fn test_server_addr() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "127.0.0.1:7879");
    }

    #[test]
    fn test_available_keys() {
        let keys = Config::available_keys();
        for key in &keys {
            assert!(Config::default().get(key).is_some(), "missing getter for {}", key);
        }
    }
}
