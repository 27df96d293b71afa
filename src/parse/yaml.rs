//! YAML replacer documents

use crate::domain::{Format, ReplaceData};
use crate::error::{ReplaceError, Result};

pub fn parse_yaml(content: &str) -> Result<ReplaceData> {
    serde_yaml::from_str(content).map_err(|e| ReplaceError::parse(Format::Yaml, e))
}
