//! # Validate Subcommand
//!
//! Validates every discovered question bank, reports all violations per
//! file, and on a clean run optionally writes the content manifest.
//!
//! A bad file never stops the run: load failures and rule violations are
//! reported under a `[FAIL]` header and the next file is processed. Only
//! discovery failures and manifest write failures abort.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use qbank_core::{load_document, BankKind, Timestamp};
use qbank_manifest::{write_if_changed, ManifestBuilder, WriteOutcome};
use qbank_schema::validate_loaded;

use crate::config::Settings;
use crate::discover::discover_files;
use crate::display_relative;

/// Arguments for the `qbank validate` subcommand.
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Bank files to validate. Defaults to every `*.json` in the content directory.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Only print failures and the manifest notice.
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the content manifest here when every bank is valid.
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Fixed `generated_at` for the manifest (RFC 3339, UTC, `Z` suffix).
    #[arg(long, value_name = "TIMESTAMP")]
    pub generated_at: Option<String>,
}

/// Execute the validate subcommand, reporting to stdout.
///
/// Returns exit code: 0 when every bank is valid, 1 otherwise.
pub fn run_validate(args: &ValidateArgs, settings: &Settings) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_validate_to(args, settings, &mut out)
}

/// Execute the validate subcommand, writing the report to `out`.
pub fn run_validate_to(
    args: &ValidateArgs,
    settings: &Settings,
    out: &mut impl Write,
) -> Result<u8> {
    let files = discover_files(&args.paths, settings)?;
    tracing::info!(
        files = files.len(),
        root = %settings.root.display(),
        "validating question banks"
    );

    // Reject a bad timestamp before any file is loaded or reported.
    let generated_at = match &args.manifest {
        Some(_) => Some(resolve_generated_at(
            args.generated_at.as_deref(),
            std::env::var("SOURCE_DATE_EPOCH").ok().as_deref(),
        )?),
        None => None,
    };

    let mut builder = ManifestBuilder::new(settings.pbq_suffix.clone());
    let mut failed = 0usize;

    for path in &files {
        let rel = display_relative(path, &settings.root);
        let doc = match load_document(path) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(path = %path.display(), "load failed");
                writeln!(out, "[FAIL] {rel}")?;
                writeln!(out, "  - {e}")?;
                failed += 1;
                continue;
            }
        };

        let kind = BankKind::classify(&doc.file_name(), &settings.pbq_suffix);
        let report = validate_loaded(&doc, kind);
        if !report.is_valid() {
            tracing::warn!(
                path = %path.display(),
                violations = report.violations.len(),
                "validation failed"
            );
            writeln!(out, "[FAIL] {rel}")?;
            for violation in &report.violations {
                writeln!(out, "  - {violation}")?;
            }
            failed += 1;
            continue;
        }

        if !args.quiet {
            writeln!(out, "[ OK ] {rel} ({} entries)", report.entry_count)?;
        }
        builder.record(&doc, kind, &rel);
    }

    if failed > 0 {
        tracing::warn!(failed, total = files.len(), "question banks failed validation");
        if args.manifest.is_some() {
            writeln!(out, "Manifest not written: validation failed")?;
        }
        return Ok(1);
    }

    if let (Some(manifest_path), Some(generated_at)) = (&args.manifest, generated_at) {
        let target = manifest_target(manifest_path, &settings.root);
        let manifest = builder.build(generated_at);
        let outcome = write_if_changed(&target, &manifest)
            .with_context(|| format!("failed to write manifest {}", target.display()))?;
        let shown = display_relative(&target, &settings.root);
        match outcome {
            WriteOutcome::Unchanged => writeln!(out, "Manifest unchanged at {shown}")?,
            WriteOutcome::Created | WriteOutcome::Updated => {
                writeln!(out, "Manifest written to {shown}")?
            }
        }
        tracing::info!(
            tracks = builder.track_count(),
            pbqs = builder.pbq_count(),
            entries = manifest.total_entries(),
            "manifest finalized"
        );
    }

    if !args.quiet {
        writeln!(out, "All question banks look good!")?;
    }
    Ok(0)
}

/// The manifest location: absolute paths as given, relative ones under `root`.
fn manifest_target(path: &Path, root: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Resolve the manifest `generated_at` timestamp.
///
/// Priority:
/// 1. Explicit --generated-at flag
/// 2. SOURCE_DATE_EPOCH environment variable
/// 3. Current UTC time
///
/// An unparseable SOURCE_DATE_EPOCH is ignored.
fn resolve_generated_at(
    explicit: Option<&str>,
    source_date_epoch: Option<&str>,
) -> Result<Timestamp> {
    if let Some(ts) = explicit {
        return Timestamp::parse(ts)
            .with_context(|| format!("invalid --generated-at value '{ts}'"));
    }

    if let Some(epoch) = source_date_epoch.and_then(|s| s.trim().parse::<i64>().ok()) {
        if let Ok(ts) = Timestamp::from_epoch_secs(epoch) {
            return Ok(ts);
        }
        tracing::warn!(epoch, "SOURCE_DATE_EPOCH out of range; using current time");
    }

    Ok(Timestamp::now())
}
