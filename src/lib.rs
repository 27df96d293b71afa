//! tag-replacer: substitute delimited placeholder tags in a text file
//!
//! Replacement pairs come from inline JSON/YAML/CSV, a replacer file, or
//! environment variables. Each pair replaces `start_tag + key + end_tag`
//! with its value, in list order.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod parse;
pub mod source;
pub mod substitute;
pub mod utils;

pub use domain::{Format, ReplaceData, ReplaceItem, SourceKind};
pub use error::ReplaceError;
pub use source::{load_replacer, EnvLookup, ProcessEnv};
pub use substitute::{apply_replacements, replace_tags};
