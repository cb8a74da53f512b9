//! Reverse command handler
//!
//! Reverse geocoding: coordinate to place description.

use crate::cli::formatter;
use crate::config::Config;
use crate::coord::Coordinates;
use crate::error::Result;
use crate::geo::{get_geocoder, Geocoder};
use clap::Args;

/// Reverse command arguments
#[derive(Args)]
pub struct ReverseArgs {
    /// Latitude
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Output format (json or text)
    #[arg(long, short = 'f')]
    pub format: Option<String>,
}

/// Run the reverse command
pub async fn run(args: ReverseArgs) -> Result<()> {
    let point = Coordinates::new(args.lat, args.lon);
    point.validate()?;

    let config = Config::load()?;
    let formatter = formatter(args.format.as_deref().unwrap_or(&config.output.format))?;

    let geocoder = get_geocoder(&config.geocoder)?;
    let detail = geocoder.location_details(point.lat, point.lon).await?;

    print!("{}", formatter.format_detail(detail.as_ref())?);
    Ok(())
}
