//! # qbank-cli: Question-Bank Validation CLI
//!
//! Provides the `qbank` command-line interface used in development and CI
//! to gate study content:
//!
//! ```bash
//! qbank validate                                  # every bank under docs/questions/
//! qbank validate docs/questions/networkplus.json  # explicit files
//! qbank validate -q --manifest docs/questions/manifest.json
//! ```
//!
//! Argument parsing lives in `main.rs`; this library holds configuration,
//! file discovery, and the validation orchestrator so they can be tested
//! without spawning the binary.

pub mod config;
pub mod discover;
pub mod validate;

use std::path::{Path, PathBuf};

/// Resolve a path against the project root.
///
/// Absolute paths are returned as-is; relative ones are joined onto `root`
/// whether or not the result exists. The current directory is never
/// consulted.
pub fn resolve_path(path: &Path, root: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Render `path` relative to `root` with `/` separators, falling back to
/// the full path when it lies outside `root`.
pub fn display_relative(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.display().to_string(),
    }
}
