//! CLI for savepath.

mod commands;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use savepath_core::config;
use std::path::PathBuf;

use commands::{run_expand, run_inspect, run_name, run_probe, run_sanitize};

/// Top-level CLI for savepath.
#[derive(Debug, Parser)]
#[command(name = "savepath")]
#[command(about = "savepath: templated, sanitized save paths for downloads", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/savepath/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Expand a `<...>` template with the given variables.
    Expand {
        /// Template, e.g. "<###index>-<title|name>".
        format: String,
        /// Template variable (repeatable).
        #[arg(short = 'v', long = "var", value_name = "KEY=VALUE", value_parser = parse_var)]
        vars: Vec<(String, String)>,
    },

    /// Show the components and validity of a path.
    Inspect {
        /// Path to inspect.
        path: String,
    },

    /// Replace invalid characters in a path or filename.
    Sanitize {
        /// Path (or filename with --filename) to sanitize.
        path: String,
        /// Treat the input as a single filename: slashes are replaced too.
        #[arg(long)]
        filename: bool,
        /// Replacement for invalid characters (default from config).
        #[arg(long, value_name = "STR")]
        replacement: Option<String>,
    },

    /// HEAD a URL and report the filename and extension its headers suggest.
    Probe {
        /// Direct HTTP/HTTPS URL.
        url: String,
        /// Print the guess as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Build the save path for a URL from a template.
    Name {
        /// Direct HTTP/HTTPS URL.
        url: String,
        /// Template (default from config).
        #[arg(long, value_name = "TEMPLATE")]
        template: Option<String>,
        /// Skip the HEAD probe and use only the URL.
        #[arg(long)]
        no_probe: bool,
        /// Extra template variable (repeatable); overrides derived ones.
        #[arg(short = 'v', long = "var", value_name = "KEY=VALUE", value_parser = parse_var)]
        vars: Vec<(String, String)>,
    },
}

/// Parses `KEY=VALUE`; the value may be empty or contain `=`.
fn parse_var(s: &str) -> Result<(String, String)> {
    match s.split_once('=') {
        Some((k, v)) if !k.is_empty() => Ok((k.to_string(), v.to_string())),
        _ => bail!("expected KEY=VALUE, got {s:?}"),
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Expand { format, vars } => run_expand(&format, &vars),
            CliCommand::Inspect { path } => run_inspect(&path),
            CliCommand::Sanitize {
                path,
                filename,
                replacement,
            } => {
                let replacement = replacement.unwrap_or_else(|| cfg.replacement.clone());
                run_sanitize(&path, filename, &replacement)
            }
            CliCommand::Probe { url, json } => run_probe(&cfg, &url, json).await,
            CliCommand::Name {
                url,
                template,
                no_probe,
                vars,
            } => run_name(&cfg, &url, template.as_deref(), no_probe, &vars).await,
        }
    }
}

#[cfg(test)]
mod tests;
