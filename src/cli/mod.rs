//! Command-line interface for tag-replacer
//!
//! A single command: load a replacer, substitute placeholders in `--in`,
//! write the result to `--out`.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{apply_env_overrides, load_config, merge_cli_with_config, CliOverrides, Config};
use crate::source::{load_replacer, EnvLookup, ProcessEnv};
use crate::substitute::replace_tags;

/// Replace tags in a file using JSON, YAML, CSV, or environment variables
#[derive(Parser, Debug)]
#[command(name = "tag-replacer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Replacer string, replacer file path, or comma-separated environment variable names
    #[arg(short = 'r', long, value_name = "REPLACER")]
    pub replacer: String,

    /// Replacer type: string, file, or environment [default: string]
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub source_type: Option<String>,

    /// Replacer format when --type is string: json, yaml, or csv [default: json]
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Input file containing placeholders
    #[arg(short = 'i', long = "in", value_name = "PATH")]
    pub input: PathBuf,

    /// Output file to create or overwrite
    #[arg(short = 'o', long = "out", value_name = "PATH")]
    pub output: PathBuf,

    /// Placeholder opening delimiter [default: {{]
    #[arg(long = "start_tag", visible_alias = "start-tag", value_name = "TAG")]
    pub start_tag: Option<String>,

    /// Placeholder closing delimiter [default: }}]
    #[arg(long = "end_tag", visible_alias = "end-tag", value_name = "TAG")]
    pub end_tag: Option<String>,

    /// Config file (TOML or YAML); otherwise tag-replacer.{toml,yml,yaml} is looked up
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            source_type: self.source_type.clone(),
            format: self.format.clone(),
            start_tag: self.start_tag.clone(),
            end_tag: self.end_tag.clone(),
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let config = load_config(&cwd, cli.config.as_deref())?;
    let config = apply_env_overrides(config)?;
    let settings = merge_cli_with_config(config, &cli.overrides());

    execute(&cli, &settings, &ProcessEnv)
}

/// Load the replacer and rewrite the input file. Nothing is written if
/// loading fails.
pub fn execute(cli: &Cli, settings: &Config, env: &dyn EnvLookup) -> Result<()> {
    tracing::debug!(
        "type={} format={} start_tag={:?} end_tag={:?}",
        settings.source_type,
        settings.format,
        settings.start_tag,
        settings.end_tag
    );

    let data = load_replacer(&cli.replacer, &settings.source_type, &settings.format, env)
        .context("Failed to load replacer")?;

    replace_tags(&data, &cli.input, &cli.output, &settings.start_tag, &settings.end_tag)
        .context("Failed to replace tags")?;

    Ok(())
}

// A valid RUST_LOG always takes precedence; otherwise --verbose selects DEBUG over WARN.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tag-replacer").chain(args.iter().copied()))
            .expect("valid args")
    }

    #[test]
    fn required_flags_are_enforced() {
        let result = Cli::try_parse_from(["tag-replacer", "--replacer", "{}", "--in", "a.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn underscore_and_dash_tag_flags_are_accepted() {
        let cli = parse(&["-r", "x", "-i", "a", "-o", "b", "--start_tag", "<<", "--end-tag", ">>"]);
        assert_eq!(cli.start_tag.as_deref(), Some("<<"));
        assert_eq!(cli.end_tag.as_deref(), Some(">>"));
    }

    #[test]
    fn unset_flags_fall_through_to_config() {
        let cli = parse(&["--replacer", "x", "--in", "a", "--out", "b"]);
        let settings = merge_cli_with_config(Config::default(), &cli.overrides());
        assert_eq!(settings, Config::default());
    }

    #[test]
    fn execute_substitutes_environment_values() {
        let tmp = TempDir::new().expect("tmp");
        let input = tmp.path().join("in.txt");
        let output = tmp.path().join("out.txt");
        fs::write(&input, "{{MYVAR}} {{UNSET}}").expect("write");

        let cli = parse(&[
            "-r",
            "MYVAR, UNSET",
            "-t",
            "environment",
            "-i",
            input.to_str().expect("utf8"),
            "-o",
            output.to_str().expect("utf8"),
        ]);
        let settings = merge_cli_with_config(Config::default(), &cli.overrides());
        let mut env = HashMap::new();
        env.insert("MYVAR".to_string(), "World".to_string());

        execute(&cli, &settings, &env).expect("execute");
        assert_eq!(fs::read_to_string(&output).expect("read"), "World {{UNSET}}");
    }

    #[test]
    fn execute_does_not_write_when_loading_fails() {
        let tmp = TempDir::new().expect("tmp");
        let input = tmp.path().join("in.txt");
        let output = tmp.path().join("out.txt");
        fs::write(&input, "{{NAME}}").expect("write");

        let cli = parse(&[
            "-r",
            r#"{"replace":"#,
            "-i",
            input.to_str().expect("utf8"),
            "-o",
            output.to_str().expect("utf8"),
        ]);
        let settings = merge_cli_with_config(Config::default(), &cli.overrides());

        let err = execute(&cli, &settings, &HashMap::<String, String>::new()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse json replacer"));
        assert!(!output.exists());
    }
}
