//! Deterministic rendering and write-if-changed persistence.
//!
//! A manifest regenerated from unchanged inputs differs from the file on
//! disk only in `generated_at`. [`write_if_changed`] re-renders the new
//! manifest with the existing timestamp and skips the write when the bytes
//! match, so repeated runs leave content and mtime untouched.

use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use crate::error::ManifestError;
use crate::model::Manifest;

/// What [`write_if_changed`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// No file existed; one was written.
    Created,
    /// The existing file differed and was replaced.
    Updated,
    /// The existing file already held this content; nothing was written.
    Unchanged,
}

impl WriteOutcome {
    /// True when the file on disk was modified.
    pub fn wrote(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Render the manifest as pretty JSON with sorted keys and a trailing newline.
pub fn render(manifest: &Manifest) -> Result<String, ManifestError> {
    // Round-trip through Value so map keys come out sorted.
    let value = serde_json::to_value(manifest)?;
    let mut out = serde_json::to_string_pretty(&value)?;
    out.push('\n');
    Ok(out)
}

/// Write `manifest` to `path` unless the file already holds the same
/// content, ignoring `generated_at`. Parent directories are created.
///
/// # Errors
///
/// Returns `ManifestError::Io` if the existing file cannot be read for a
/// reason other than absence, or if creating directories or writing fails.
pub fn write_if_changed(path: &Path, manifest: &Manifest) -> Result<WriteOutcome, ManifestError> {
    let existing = match std::fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(source) => {
            return Err(ManifestError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if let Some(existing) = &existing {
        if let Some(previous) = existing_generated_at(existing) {
            let candidate = render(&manifest.with_generated_at(previous))?;
            if candidate.as_bytes() == existing.as_slice() {
                tracing::debug!(path = %path.display(), "manifest unchanged");
                return Ok(WriteOutcome::Unchanged);
            }
        }
    }

    let rendered = render(manifest)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ManifestError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, rendered.as_bytes()).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let outcome = if existing.is_some() {
        WriteOutcome::Updated
    } else {
        WriteOutcome::Created
    };
    tracing::info!(path = %path.display(), ?outcome, "manifest written");
    Ok(outcome)
}

/// `generated_at` of an existing manifest, if it parses and has one.
pub fn existing_generated_at(bytes: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(bytes).ok()?;
    value
        .get("generated_at")
        .and_then(Value::as_str)
        .map(str::to_string)
}
