//! Cities command handler

use crate::cli::formatter;
use crate::config::Config;
use crate::error::Result;
use crate::geo::popular_cities;
use clap::Args;

/// Cities command arguments
#[derive(Args)]
pub struct CitiesArgs {
    /// Output format (json or text)
    #[arg(long, short = 'f')]
    pub format: Option<String>,
}

/// Print the popular cities shortcut list
pub fn run(args: CitiesArgs) -> Result<()> {
    let format = match args.format {
        Some(format) => format,
        None => Config::load()?.output.format,
    };

    print!("{}", formatter(&format)?.format_cities(popular_cities())?);
    Ok(())
}
