//! Validate command handler
//!
//! Accepts raw text so that non-numeric input is reported as invalid
//! instead of being rejected by the argument parser.

use crate::coord::Coordinates;
use crate::error::Result;
use clap::Args;

/// Validate command arguments
#[derive(Args)]
pub struct ValidateArgs {
    /// Latitude
    #[arg(long, allow_hyphen_values = true)]
    pub lat: String,

    /// Longitude
    #[arg(long, allow_hyphen_values = true)]
    pub lon: String,
}

/// Run the validate command
///
/// Exits with status 1 when the pair is invalid.
pub fn run(args: ValidateArgs) -> Result<()> {
    match Coordinates::parse(&args.lat, &args.lon) {
        Ok(coords) => {
            println!("valid: ({}, {})", coords.lat, coords.lon);
            Ok(())
        }
        Err(e) => {
            println!("invalid: {}", e);
            std::process::exit(1);
        }
    }
}
