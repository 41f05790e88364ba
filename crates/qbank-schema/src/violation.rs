//! # Violations and Reports
//!
//! A [`Violation`] is one human-readable rule failure. Entry-level
//! violations carry a location of the form `<file>[<index>]`; root-level
//! violations (the document is not a list) have none.

use std::fmt;

use qbank_core::BankKind;
use serde::Serialize;
use serde_json::Value;

/// A single content rule failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// `<file>[<index>]` for entry-level violations, `None` at the root.
    pub location: Option<String>,
    /// Human-readable description of the failure.
    pub message: String,
}

impl Violation {
    /// A violation about the document as a whole.
    pub fn root(message: impl Into<String>) -> Self {
        Self {
            location: None,
            message: message.into(),
        }
    }

    /// A violation about one entry.
    pub fn at(location: &str, message: impl Into<String>) -> Self {
        Self {
            location: Some(location.to_string()),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{location}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Outcome of validating one document.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Shape the document was validated as.
    pub kind: BankKind,
    /// Root array length, or 0 for a non-array root.
    pub entry_count: usize,
    /// Every violation found, in document order.
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// True when no violations were found.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// `<file>[<index>]`
pub(crate) fn entry_location(file_name: &str, index: usize) -> String {
    format!("{file_name}[{index}]")
}

/// Render a JSON value for a message: strings in single quotes, anything
/// else as JSON text.
pub(crate) fn quoted(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{s}'"),
        other => other.to_string(),
    }
}

/// Identity key for id comparison. JSON text keeps `"1"` and `1` distinct.
pub(crate) fn id_key(value: &Value) -> String {
    value.to_string()
}
