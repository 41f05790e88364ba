//! # qbank CLI entry point
//!
//! Parses command-line arguments, resolves the project root and
//! configuration, and dispatches to subcommand handlers. Logs go to stderr;
//! stdout carries only the validation report.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use qbank_cli::config::{find_project_root, QbankConfig, Settings};
use qbank_cli::validate::{run_validate, ValidateArgs};

/// Question-bank validator and manifest builder.
///
/// Checks multiple-choice track banks and performance-based question banks
/// for structural problems, and writes a content manifest for consumers.
#[derive(Parser, Debug)]
#[command(name = "qbank", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Project root. Defaults to the nearest ancestor holding the content directory.
    #[arg(long, env = "QBANK_ROOT", global = true)]
    root: Option<PathBuf>,

    /// Path to configuration file. Defaults to `<root>/qbank.yaml` when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate question banks and optionally write the content manifest.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let root = match cli.root {
        Some(root) => root,
        None => resolve_project_root(),
    };
    tracing::debug!(root = %root.display(), "resolved project root");

    let config = QbankConfig::discover(cli.config.as_deref(), &root)
        .context("failed to load configuration")?;
    let settings = Settings::from_config(root, config);

    match cli.command {
        Commands::Validate(args) => run_validate(&args, &settings),
    }
}

/// Walk up from the current directory to the project root, falling back to
/// the current directory itself.
fn resolve_project_root() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_project_root(&cwd).unwrap_or_else(|| {
        tracing::warn!("Could not locate project root; using current directory");
        cwd
    })
}
