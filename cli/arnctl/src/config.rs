//! CLI configuration (env-driven).

use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::output::OutputFormat;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => bail!("unknown log format '{other}' (expected text or json)"),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Default output format when `--format` is not given.
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::default(),
            output: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = lookup("ARN_LOG_LEVEL").unwrap_or(defaults.log_level);

        let log_format = lookup("ARN_LOG_FORMAT")
            .map(|v| v.parse())
            .transpose()
            .context("ARN_LOG_FORMAT must be 'text' or 'json'.")?
            .unwrap_or(defaults.log_format);

        let output = lookup("ARN_OUTPUT")
            .map(|v| v.parse())
            .transpose()
            .context("ARN_OUTPUT must be 'table' or 'json'.")?
            .unwrap_or(defaults.output);

        Ok(Self {
            log_level,
            log_format,
            output,
        })
    }
}
