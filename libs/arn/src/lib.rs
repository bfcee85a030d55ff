//! # arn
//!
//! Parsing, validation, and formatting of ARN-style resource identifiers.
//!
//! ## Format
//!
//! ```text
//! scheme:partition:service:region:account-id:resource-value
//! resource-value := resource | resource-type ( ":" | "/" ) resource
//! ```
//!
//! Examples:
//! - `arn:aws:s3:::my-bucket/my-key`
//! - `arn:aws:iam::123456789012:user/testuser`
//! - `arn:aws:rds:eu-west-1:123456789012:db:mysql-db`
//!
//! ## Design Principles
//!
//! - Validation is structural only: six segments, contents unchecked
//! - Formatting reproduces the parsed input byte for byte
//! - The resource-type delimiter is whichever of `:` and `/` comes first
//!
//! ```
//! let name = arn::parse("arn:aws:rds:eu-west-1:123456789012:db:mysql-db")?;
//! assert_eq!(name.resource_type, "db");
//! assert_eq!(name.resource_delimiter, ":");
//! assert_eq!(name.resource, "mysql-db");
//! assert_eq!(name.to_string(), "arn:aws:rds:eu-west-1:123456789012:db:mysql-db");
//! # Ok::<(), arn::ArnError>(())
//! ```
//!
//! ## Features
//!
//! - `sqlx`: stores `ResourceName` in PostgreSQL TEXT columns.

mod error;
mod name;
pub mod storage;

pub use error::{ArnError, ScanError};
pub use name::{parse, validate, ResourceName};
pub use storage::{to_storable_value, StorableValue};
