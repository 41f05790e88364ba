//! Manifest persistence errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to render or persist a manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest could not be serialized.
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Reading the existing manifest or writing the new one failed.
    #[error("manifest io error at {}: {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
}
