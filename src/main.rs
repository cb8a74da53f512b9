//! foresky-geo CLI entry point
//!
//! Location search and reverse geocoding - CLI + web API

use foresky_geo::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
