//! Error types for ARN parsing and storage conversion.

use thiserror::Error;

/// Errors that can occur when parsing or validating an ARN.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArnError {
    /// The input does not split into the six top-level segments.
    #[error("invalid ARN: expected at least 6 colon-delimited segments, found {found}")]
    TooFewSegments { found: usize },
}

impl ArnError {
    /// Number of top-level segments the rejected input contained.
    pub fn segments_found(&self) -> usize {
        match self {
            ArnError::TooFewSegments { found } => *found,
        }
    }
}

/// Errors that can occur when scanning a stored value into a `ResourceName`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The stored value is neither text, bytes, nor null.
    #[error("scan: unable to scan type {type_name} into ResourceName")]
    UnsupportedType { type_name: &'static str },

    /// The stored bytes are not valid UTF-8.
    #[error("scan: stored bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// The stored text is not a structurally valid ARN.
    #[error("scan: {0}")]
    Invalid(#[from] ArnError),
}

impl ScanError {
    /// Returns true if this error indicates an unsupported source type.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, ScanError::UnsupportedType { .. })
    }
}
