//! Replacer format parsers
//!
//! Each parser turns raw text into a [`ReplaceData`] list:
//! - JSON / YAML: `{ replace: [ {key, value} ] }` documents
//! - CSV: a header row with `key` and `value` columns, one pair per row
//! - Environment: comma-separated variable names resolved through an [`EnvLookup`]

use crate::domain::{Format, ReplaceData};
use crate::error::Result;

pub mod csv;
pub mod env;
pub mod json;
pub mod yaml;

pub use env::{EnvLookup, ProcessEnv};

/// Decode `content` with the parser selected by `format`.
pub fn parse_content(content: &str, format: Format) -> Result<ReplaceData> {
    match format {
        Format::Json => json::parse_json(content),
        Format::Yaml => yaml::parse_yaml(content),
        Format::Csv => csv::parse_csv(content),
    }
}
