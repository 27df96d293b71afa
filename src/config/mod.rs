//! Configuration loading and merging
//!
//! Handles loading from config files, environment variables, and CLI arguments
//! with proper precedence (CLI > Env > File > Defaults).

use serde::{Deserialize, Serialize};

pub mod loader;
pub mod merge;

pub use loader::{apply_env_overrides, load_config};
pub use merge::{merge_cli_with_config, CliOverrides};

pub const DEFAULT_SOURCE_TYPE: &str = "string";
pub const DEFAULT_FORMAT: &str = "json";
pub const DEFAULT_START_TAG: &str = "{{";
pub const DEFAULT_END_TAG: &str = "}}";

/// Settings that may come from a config file or the environment.
///
/// `type` and `format` stay as raw strings; the loader validates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(rename = "type")]
    pub source_type: String,
    pub format: String,
    pub start_tag: String,
    pub end_tag: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_type: DEFAULT_SOURCE_TYPE.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            start_tag: DEFAULT_START_TAG.to_string(),
            end_tag: DEFAULT_END_TAG.to_string(),
        }
    }
}
