//! Validate command.

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_output, OutputFormat};

use super::CommandContext;

/// Check identifiers for structural validity.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Identifiers to check. Reads one per line from stdin when omitted.
    arns: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct ValidationRow {
    arn: String,
    valid: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    error: String,
}

impl ValidationRow {
    fn check(input: &str) -> Self {
        match arn::validate(input) {
            Ok(()) => Self {
                arn: input.to_string(),
                valid: true,
                error: String::new(),
            },
            Err(e) => Self {
                arn: input.to_string(),
                valid: false,
                error: e.to_string(),
            },
        }
    }
}

impl ValidateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let inputs = if self.arns.is_empty() {
            read_lines(io::stdin().lock())?
        } else {
            self.arns
        };
        debug!(count = inputs.len(), "Validating identifiers");

        let rows: Vec<ValidationRow> = inputs.iter().map(|s| ValidationRow::check(s)).collect();
        let invalid = rows.iter().filter(|row| !row.valid).count();

        match ctx.format {
            OutputFormat::Json => print_output(&rows, ctx.format),
            OutputFormat::Table => {
                for row in &rows {
                    if row.valid {
                        println!("{} {}", "valid".green(), row.arn);
                    } else {
                        println!("{} {} ({})", "invalid".red(), row.arn, row.error);
                    }
                }
            }
        }

        if invalid > 0 {
            return Err(CliError::InvalidIdentifiers {
                count: invalid,
                total: rows.len(),
            }
            .into());
        }

        Ok(())
    }
}

/// Read non-blank lines, trimmed of the line terminator only.
fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read identifiers from stdin")?;
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}
