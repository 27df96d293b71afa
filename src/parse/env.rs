//! Environment variable replacers

use std::collections::HashMap;

use crate::domain::{ReplaceData, ReplaceItem};
use crate::utils::split_list;

/// Read-only key/value lookup standing in for the process environment.
pub trait EnvLookup {
    fn get(&self, name: &str) -> Option<String>;
}

/// Lookup backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

/// Resolve a comma-separated list of variable names.
///
/// Unset and empty-valued variables are skipped; an unset one is logged.
pub fn parse_env(names: &str, env: &dyn EnvLookup) -> ReplaceData {
    let mut data = ReplaceData::default();
    for name in split_list(names) {
        match env.get(&name) {
            Some(value) if !value.is_empty() => data.push(ReplaceItem::new(name, value)),
            Some(_) => tracing::debug!("Environment variable '{}' is empty, skipping", name),
            None => tracing::warn!("Environment variable '{}' not found", name),
        }
    }
    data
}
