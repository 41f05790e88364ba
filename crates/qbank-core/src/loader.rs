//! # Document Loader
//!
//! Reads a content file once and parses it as JSON. The raw bytes are
//! retained for content hashing; the parsed value feeds the validators.
//! There is no partial-success mode: a document either loads completely or
//! yields a [`LoadError`].

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::digest::ContentDigest;
use crate::error::LoadError;

/// A content file that has been read and parsed.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    path: PathBuf,
    bytes: Vec<u8>,
    value: Value,
}

impl LoadedDocument {
    /// Build a document from bytes already in memory.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Parse` if `bytes` is not valid JSON.
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Result<Self, LoadError> {
        let path = path.into();
        let value = match serde_json::from_slice(&bytes) {
            Ok(v) => v,
            Err(source) => return Err(LoadError::Parse { path, source }),
        };
        Ok(Self { path, bytes, value })
    }

    /// Path the document was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name component of the path, or the whole path if it has none.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// The raw bytes exactly as read from disk.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The parsed JSON value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Number of entries in the document: the root array length, or 0 when
    /// the root is not an array.
    pub fn entry_count(&self) -> usize {
        self.value.as_array().map_or(0, Vec::len)
    }

    /// SHA-256 digest of the raw bytes.
    pub fn digest(&self) -> ContentDigest {
        ContentDigest::of_bytes(&self.bytes)
    }
}

/// Load and parse the JSON document at `path`.
///
/// # Errors
///
/// Returns `LoadError::Read` if the file cannot be read and
/// `LoadError::Parse` if its contents are not valid JSON.
pub fn load_document(path: &Path) -> Result<LoadedDocument, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::trace!(path = %path.display(), len = bytes.len(), "read document");
    LoadedDocument::from_bytes(path, bytes)
}

/// Name of a JSON value's type, used in type-mismatch messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
