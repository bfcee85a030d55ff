//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{count} of {total} identifiers are invalid")]
    InvalidIdentifiers { count: usize, total: usize },

    #[error("invalid resource delimiter '{0}'")]
    InvalidDelimiter(String),

    #[error("'{formatted}' does not parse back to the given components")]
    NotReversible { formatted: String },

    #[error(transparent)]
    Arn(#[from] arn::ArnError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::InvalidDelimiter(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: The delimiter must be ':' or '/'.".yellow()
                );
            }
            CliError::NotReversible { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Only the resource may contain ':' or '/'. Pass --resource-type if it does."
                        .yellow()
                );
            }
            CliError::Arn(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: An ARN needs six ':'-separated segments, e.g. arn:aws:s3:::bucket."
                        .yellow()
                );
            }
            CliError::InvalidIdentifiers { .. } => {}
        }
    }
}
