//! Format command (components to identifier).

use anyhow::Result;
use arn::ResourceName;
use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::error::CliError;
use crate::output::print_single;

use super::CommandContext;

/// Build an identifier from its components.
#[derive(Debug, Args)]
pub struct FormatCommand {
    /// Scheme literal.
    #[arg(long, default_value = "arn")]
    scheme: String,

    /// Partition (for example aws).
    #[arg(long)]
    partition: Option<String>,

    /// Service (for example s3).
    #[arg(long)]
    service: Option<String>,

    /// Region. Omit for global resources.
    #[arg(long)]
    region: Option<String>,

    /// Owning account.
    #[arg(long)]
    account_id: Option<String>,

    /// Resource type.
    #[arg(long)]
    resource_type: Option<String>,

    /// Delimiter between resource type and resource (':' or '/').
    #[arg(long, requires = "resource_type", default_value = "/")]
    delimiter: String,

    /// Resource.
    #[arg(long)]
    resource: String,
}

#[derive(Debug, Serialize)]
struct FormatView {
    arn: String,
}

impl FormatCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let name = self.into_resource_name()?;
        let formatted = name.to_string();

        if arn::parse(&formatted).as_ref() != Ok(&name) {
            return Err(CliError::NotReversible { formatted }.into());
        }

        debug!(arn = %formatted, "Formatted identifier");
        let view = FormatView { arn: formatted };
        print_single(&view.arn, &view, ctx.format);
        Ok(())
    }

    fn into_resource_name(self) -> Result<ResourceName, CliError> {
        let resource_type = self.resource_type.unwrap_or_default();
        let resource_delimiter = if resource_type.is_empty() {
            String::new()
        } else {
            match self.delimiter.as_str() {
                ":" | "/" => self.delimiter,
                _ => return Err(CliError::InvalidDelimiter(self.delimiter)),
            }
        };

        Ok(ResourceName {
            scheme: self.scheme,
            partition: self.partition.unwrap_or_default(),
            service: self.service.unwrap_or_default(),
            region: self.region.unwrap_or_default(),
            account_id: self.account_id.unwrap_or_default(),
            resource_type,
            resource_delimiter,
            resource: self.resource,
        })
    }
}
