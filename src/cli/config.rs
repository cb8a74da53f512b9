//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "geocoder.language")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    if args.path {
        println!("{}", Config::config_path()?.display());
        return Ok(());
    }

    if args.reset {
        Config::default().save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;

    match (args.key.as_deref(), args.value.as_deref()) {
        (None, None) => print!("{}", render_all(&config)),
        (Some(key), None) => println!("{}", lookup(&config, key)?),
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save()?;
            println!("{} = {}", key, value);
        }
        (None, Some(_)) => {
            return Err(Error::Config("Must specify a key to set a value".to_string()));
        }
    }

    Ok(())
}

/// Every known key as `key = value` lines
fn render_all(config: &Config) -> String {
    Config::available_keys()
        .into_iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

/// Value of a single key; unknown keys list the valid ones
fn lookup(config: &Config, key: &str) -> Result<String> {
    config.get(key).ok_or_else(|| {
        Error::Config(format!(
            "Unknown config key: {} (available: {})",
            key,
            Config::available_keys().join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_all_lists_every_key() {
        let output = render_all(&Config::default());

        assert_eq!(output.lines().count(), Config::available_keys().len());
        assert!(output.contains("geocoder.language = id\n"));
        assert!(output.contains("server.port = 7879\n"));
    }

    #[test]
    fn test_lookup_known_key() {
        assert_eq!(lookup(&Config::default(), "search.limit").unwrap(), "5");
    }

    #[test]
    fn test_lookup_unknown_key_is_config_error() {
        let err = lookup(&Config::default(), "geocoder.colour").unwrap_err();

        assert!(matches!(err, Error::Config(_)));
        let message = err.to_string();
        assert!(message.contains("geocoder.colour"));
        assert!(message.contains("output.format"));
    }
}
