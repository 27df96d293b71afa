//! Replacer loading (inline string, file, environment)

use std::fs;
use std::path::Path;

use crate::domain::{Format, ReplaceData, SourceKind};
use crate::error::{ReplaceError, Result};
use crate::parse::{env::parse_env, parse_content};
use crate::utils::extension_lower;

pub use crate::parse::{EnvLookup, ProcessEnv};

/// Load replacement pairs from `descriptor`.
///
/// Dispatches on `kind`:
/// - `file` → [`load_file`], format picked from the extension
/// - `string` → [`load_string`], format picked by `format`
/// - `environment` → comma-separated names resolved through `env`
///
/// `format` is only parsed for `string`, so an unknown format alongside
/// another kind is ignored.
pub fn load_replacer(
    descriptor: &str,
    kind: &str,
    format: &str,
    env: &dyn EnvLookup,
) -> Result<ReplaceData> {
    let data = match kind.parse::<SourceKind>()? {
        SourceKind::File => load_file(Path::new(descriptor))?,
        SourceKind::String => load_string(descriptor, format.parse()?)?,
        SourceKind::Environment => parse_env(descriptor, env),
    };
    tracing::debug!("Loaded {} replacement(s) from {} replacer", data.len(), kind);
    Ok(data)
}

pub fn load_string(content: &str, format: Format) -> Result<ReplaceData> {
    parse_content(content, format)
}

/// Load a replacer file; the extension (any case) must be `.json`, `.yaml`,
/// `.yml` or `.csv`.
pub fn load_file(path: &Path) -> Result<ReplaceData> {
    let ext = extension_lower(path);
    let format = Format::from_extension(&ext).ok_or_else(|| ReplaceError::UnsupportedFormat {
        extension: if ext.is_empty() { "<none>".to_string() } else { format!(".{ext}") },
    })?;

    let content = fs::read_to_string(path).map_err(|e| ReplaceError::io(path, e))?;
    parse_content(&content, format)
}
