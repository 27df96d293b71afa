//! tag-replacer: replace placeholder tags in a file with values from JSON,
//! YAML, CSV, or environment variables.

use anyhow::Result;

fn main() -> Result<()> {
    tag_replacer::cli::run()
}
