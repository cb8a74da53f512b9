//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod cities;
pub mod config;
pub mod reverse;
pub mod search;
pub mod serve;
pub mod validate;

use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter, OutputFormatter};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Location search and reverse geocoding
#[derive(Parser)]
#[command(name = "foresky-geo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search for places by name
    Search(search::SearchArgs),

    /// Describe the place at a coordinate
    Reverse(reverse::ReverseArgs),

    /// List popular cities
    Cities(cities::CitiesArgs),

    /// Check whether a coordinate pair is valid
    Validate(validate::ValidateArgs),

    /// Manage configuration
    Config(config::ConfigArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.command {
        Commands::Serve(_) => "info",
        _ => "warn",
    };
    init_logging(default_level);

    match cli.command {
        Commands::Search(args) => search::run(args).await,
        Commands::Reverse(args) => reverse::run(args).await,
        Commands::Cities(args) => cities::run(args),
        Commands::Validate(args) => validate::run(args),
        Commands::Config(args) => config::run(args),
        Commands::Serve(args) => serve::run(args).await,
    }
}

/// Initialize logging to stderr, honouring RUST_LOG
fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve an output formatter by name
pub(crate) fn formatter(name: &str) -> Result<Box<dyn OutputFormatter>> {
    get_formatter(name).ok_or_else(|| {
        let known: Vec<String> = available_formats().into_iter().map(|f| f.name).collect();
        Error::Config(format!(
            "Unknown format: {} (available: {})",
            name,
            known.join(", ")
        ))
    })
}
