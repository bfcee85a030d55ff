//! CLI commands.

mod format;
mod parse;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// arn - Parse, validate, and format ARN-style identifiers.
#[derive(Debug, Parser)]
#[command(name = "arn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format. Defaults to ARN_OUTPUT, then table.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Split identifiers into their components.
    Parse(parse::ParseCommand),

    /// Check that identifiers are structurally valid.
    Validate(validate::ValidateCommand),

    /// Build an identifier from its components.
    Format(format::FormatCommand),

    /// Print the last segment (resource type and resource) of an identifier.
    ResourceValue(parse::ResourceValueCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let ctx = CommandContext {
            format: self.format.unwrap_or(config.output),
        };

        match self.command {
            Commands::Parse(cmd) => cmd.run(&ctx),
            Commands::Validate(cmd) => cmd.run(&ctx),
            Commands::Format(cmd) => cmd.run(&ctx),
            Commands::ResourceValue(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("arn {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared context for all commands.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    pub format: OutputFormat,
}
