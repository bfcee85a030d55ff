//! Parse commands (components and resource value).

use anyhow::Result;
use arn::ResourceName;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, warn};

use crate::error::CliError;
use crate::output::{print_output, print_single};

use super::CommandContext;

/// Split identifiers into their components.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Identifiers to parse.
    #[arg(required = true)]
    arns: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct ComponentsRow {
    arn: String,
    scheme: String,
    partition: String,
    service: String,
    region: String,
    account_id: String,
    resource_type: String,
    delimiter: String,
    resource: String,
}

impl From<&ResourceName> for ComponentsRow {
    fn from(name: &ResourceName) -> Self {
        Self {
            arn: name.to_string(),
            scheme: name.scheme.clone(),
            partition: name.partition.clone(),
            service: name.service.clone(),
            region: name.region.clone(),
            account_id: name.account_id.clone(),
            resource_type: name.resource_type.clone(),
            delimiter: name.resource_delimiter.clone(),
            resource: name.resource.clone(),
        }
    }
}

impl ParseCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let total = self.arns.len();
        let mut rows = Vec::with_capacity(total);
        let mut invalid = 0;

        for input in &self.arns {
            match arn::parse(input) {
                Ok(name) => {
                    debug!(arn = %input, has_resource_type = name.has_resource_type(), "Parsed");
                    rows.push(ComponentsRow::from(&name));
                }
                Err(e) => {
                    warn!(arn = %input, error = %e, "Rejected identifier");
                    eprintln!("{} {}: {}", "invalid".red(), input, e);
                    invalid += 1;
                }
            }
        }

        print_output(&rows, ctx.format);

        if invalid > 0 {
            return Err(CliError::InvalidIdentifiers {
                count: invalid,
                total,
            }
            .into());
        }

        Ok(())
    }
}

/// Print the last segment of an identifier.
#[derive(Debug, Args)]
pub struct ResourceValueCommand {
    /// Identifier to read.
    arn: String,
}

#[derive(Debug, Serialize)]
struct ResourceValueView {
    resource_value: String,
}

impl ResourceValueCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let name = arn::parse(&self.arn).map_err(CliError::from)?;
        let view = ResourceValueView {
            resource_value: name.resource_value(),
        };

        print_single(&view.resource_value, &view, ctx.format);
        Ok(())
    }
}
