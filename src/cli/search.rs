//! Search command handler
//!
//! Forward geocoding: place name to candidate coordinates.

use crate::cli::formatter;
use crate::config::Config;
use crate::constants::lookup::MAX_LIMIT;
use crate::error::Result;
use crate::geo::{get_geocoder, Geocoder};
use clap::Args;

/// Search command arguments
#[derive(Args)]
pub struct SearchArgs {
    /// Place name or address
    pub query: String,

    /// Maximum number of results
    #[arg(long, short = 'l')]
    pub limit: Option<usize>,

    /// Output format (json or text)
    #[arg(long, short = 'f')]
    pub format: Option<String>,
}

/// Run the search command
pub async fn run(args: SearchArgs) -> Result<()> {
    let config = Config::load()?;

    let limit = args.limit.unwrap_or(config.search.limit).clamp(1, MAX_LIMIT);
    let formatter = formatter(args.format.as_deref().unwrap_or(&config.output.format))?;

    let geocoder = get_geocoder(&config.geocoder)?;
    let candidates = geocoder.search_locations(&args.query, limit).await?;

    print!("{}", formatter.format_candidates(&candidates)?);
    Ok(())
}
