//! JSON replacer documents

use crate::domain::{Format, ReplaceData};
use crate::error::{ReplaceError, Result};

pub fn parse_json(content: &str) -> Result<ReplaceData> {
    serde_json::from_str(content).map_err(|e| ReplaceError::parse(Format::Json, e))
}
