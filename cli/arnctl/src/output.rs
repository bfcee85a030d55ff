//! Output formatting for CLI commands.

use std::str::FromStr;

use anyhow::bail;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format '{other}' (expected table or json)"),
        }
    }
}

/// Print data in the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No items found.".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => println!("{}", format_json(data, "[]")),
    }
}

/// Print a single value: raw text for tables, an object for JSON.
pub fn print_single<T: Serialize>(text: &str, data: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", text),
        OutputFormat::Json => println!("{}", format_json(data, "{}")),
    }
}

/// Pretty-print as JSON, falling back to `empty` if serialization fails.
pub fn format_json<T: Serialize + ?Sized>(data: &T, empty: &str) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| empty.to_string())
}
