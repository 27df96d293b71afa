//! Shared helpers

use std::path::Path;

/// Split a comma-separated string, trimming whitespace and discarding empty
/// segments.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}

/// Lowercased extension of `path` without the dot, or an empty string.
pub fn extension_lower(path: &Path) -> String {
    path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase()
}
