//! # Error Types
//!
//! Errors shared across the workspace. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! Content problems (a wrong answer, a dangling id) are never errors: the
//! validators return them as violation lists. Only failures to obtain a
//! document at all, or to interpret a value the program itself produced,
//! travel through these types.

use std::path::PathBuf;

use thiserror::Error;

/// A timestamp string or epoch value could not be interpreted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid timestamp: {0}")]
pub struct TimestampError(pub String);

/// Failure to read or parse a content document.
///
/// Both variants name the offending path so the orchestrator can report the
/// error as the single violation for that file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to load {}: {source}", path.display())]
    Read {
        /// Path of the document.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid JSON.
    #[error("Failed to load {}: {source}", path.display())]
    Parse {
        /// Path of the document.
        path: PathBuf,
        /// Underlying parse failure, including line and column.
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Path of the document that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}
