//! Merge CLI flags over loaded configuration

use super::Config;

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub source_type: Option<String>,
    pub format: Option<String>,
    pub start_tag: Option<String>,
    pub end_tag: Option<String>,
}

pub fn merge_cli_with_config(mut config: Config, cli: &CliOverrides) -> Config {
    if let Some(source_type) = &cli.source_type {
        config.source_type = source_type.clone();
    }
    if let Some(format) = &cli.format {
        config.format = format.clone();
    }
    if let Some(start_tag) = &cli.start_tag {
        config.start_tag = start_tag.clone();
    }
    if let Some(end_tag) = &cli.end_tag {
        config.end_tag = end_tag.clone();
    }
    config
}
