//! Core replacement types shared by the loader, parsers, and substitution engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReplaceError;

/// A single key/value substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceItem {
    pub key: String,
    pub value: String,
}

impl ReplaceItem {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

/// Ordered list of substitutions, as found under the `replace` key of a
/// JSON or YAML document.
///
/// Duplicate keys are kept; they are applied in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceData {
    #[serde(default)]
    pub replace: Vec<ReplaceItem>,
}

impl ReplaceData {
    pub fn new(replace: Vec<ReplaceItem>) -> Self {
        Self { replace }
    }

    pub fn push(&mut self, item: ReplaceItem) {
        self.replace.push(item);
    }

    pub fn len(&self) -> usize {
        self.replace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replace.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReplaceItem> {
        self.replace.iter()
    }
}

impl FromIterator<ReplaceItem> for ReplaceData {
    fn from_iter<I: IntoIterator<Item = ReplaceItem>>(iter: I) -> Self {
        Self { replace: iter.into_iter().collect() }
    }
}

/// Where the replacer descriptor comes from (`--type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Descriptor is the raw content, decoded with an explicit [`Format`].
    String,
    /// Descriptor is a path; the extension selects the [`Format`].
    File,
    /// Descriptor is a comma-separated list of environment variable names.
    Environment,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::String => "string",
            SourceKind::File => "file",
            SourceKind::Environment => "environment",
        }
    }
}

impl FromStr for SourceKind {
    type Err = ReplaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(SourceKind::String),
            "file" => Ok(SourceKind::File),
            "environment" => Ok(SourceKind::Environment),
            other => Err(ReplaceError::InvalidSourceKind(other.to_string())),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialization used to encode the key/value pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Csv,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Csv => "csv",
        }
    }

    /// Map a file extension (without the dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            "csv" => Some(Format::Csv),
            _ => None,
        }
    }
}

impl FromStr for Format {
    type Err = ReplaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Format::Json),
            "yaml" => Ok(Format::Yaml),
            "csv" => Ok(Format::Csv),
            other => Err(ReplaceError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
