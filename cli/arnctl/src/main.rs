//! arnctl (arn) - CLI for ARN-style identifiers
//!
//! Parses, validates, and formats identifiers from the command line or stdin.

use anyhow::Result;
use clap::Parser;
use tracing::debug;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error::print_error(&e);
            std::process::exit(1);
        }
    };

    logging::init(&config);
    debug!(
        log_level = %config.log_level,
        output = ?config.output,
        "Configuration loaded"
    );

    if let Err(e) = cli.run(config) {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
