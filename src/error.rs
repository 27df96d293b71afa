//! Error kinds raised while loading replacers and rewriting files

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Format;

pub type Result<T, E = ReplaceError> = std::result::Result<T, E>;

/// Every failure is terminal for the invocation.
#[derive(Debug, Error)]
pub enum ReplaceError {
    /// Replacer file extension is not `.json`, `.yaml`, `.yml` or `.csv`
    #[error("Unsupported replacer file format '{extension}'. Please use JSON, CSV, or YAML.")]
    UnsupportedFormat { extension: String },

    #[error("Invalid format type '{0}'. Use 'json', 'yaml', or 'csv'.")]
    InvalidFormat(String),

    #[error("Invalid replacer type '{0}'. Use 'string', 'file', or 'environment'.")]
    InvalidSourceKind(String),

    /// Malformed JSON, YAML or CSV content
    #[error("Failed to parse {format} replacer: {source}")]
    Parse {
        format: Format,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("CSV must contain 'key' and 'value' headers (missing: {})", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// Data row too short for the resolved `key`/`value` column indices
    #[error("CSV row {row} has {found} field(s), expected at least {expected}")]
    MalformedRow { row: usize, expected: usize, found: usize },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReplaceError {
    pub(crate) fn parse(
        format: Format,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        ReplaceError::Parse { format, source: source.into() }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReplaceError::Io { path: path.into(), source }
    }
}
