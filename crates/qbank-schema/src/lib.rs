//! # qbank-schema: Content Shape Validation
//!
//! Validates parsed question-bank documents against the two content shapes:
//!
//! - [`multiple_choice`]: track files: a list of `{question, choices,
//!   answer, explanation, tags?}` objects.
//! - [`pbq`]: performance-based question banks: a list of objects tagged by
//!   `type`, dispatched to the ordering, matching, and command rules.
//!
//! ## Contract
//!
//! Validators never fail. Every rule violation found in a document is
//! collected into a [`Violation`] list, in document order, so an author sees
//! every problem in one run. Only I/O and JSON syntax failures are errors,
//! and those are raised by the loader in `qbank-core` before a validator
//! ever sees the document.

pub mod multiple_choice;
pub mod pbq;
pub mod violation;

use qbank_core::{BankKind, LoadedDocument};
use serde_json::Value;

pub use multiple_choice::validate_multiple_choice;
pub use pbq::{validate_pbq, PbqKind};
pub use violation::{ValidationReport, Violation};

/// Validate `value` as a bank of the given kind.
///
/// `file_name` prefixes each entry-level violation (`bank.json[3]: ...`).
pub fn validate_document(kind: BankKind, file_name: &str, value: &Value) -> ValidationReport {
    let violations = match kind {
        BankKind::Track => validate_multiple_choice(file_name, value),
        BankKind::Pbq => validate_pbq(file_name, value),
    };
    let entry_count = value.as_array().map_or(0, Vec::len);
    tracing::debug!(
        file = file_name,
        kind = %kind,
        entries = entry_count,
        violations = violations.len(),
        "validated document"
    );
    ValidationReport {
        kind,
        entry_count,
        violations,
    }
}

/// Validate a loaded document as a bank of the given kind.
pub fn validate_loaded(doc: &LoadedDocument, kind: BankKind) -> ValidationReport {
    validate_document(kind, &doc.file_name(), doc.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dispatches_track_to_multiple_choice_rules() {
        let report = validate_document(BankKind::Track, "t.json", &json!({}));
        assert_eq!(report.violations.len(), 1);
        assert!(report.violations[0].message.contains("question objects"));
    }

    #[test]
    fn dispatches_pbq_to_pbq_rules() {
        let report = validate_document(BankKind::Pbq, "p.json", &json!("nope"));
        assert_eq!(report.violations.len(), 1);
        assert!(report.violations[0].message.contains("PBQ objects"));
    }

    #[test]
    fn entry_count_reported_even_when_invalid() {
        let report = validate_document(BankKind::Track, "t.json", &json!([1, 2, 3]));
        assert_eq!(report.entry_count, 3);
        assert_eq!(report.violations.len(), 3);
        assert!(!report.is_valid());
    }

    #[test]
    fn validate_loaded_uses_file_name_prefix() {
        let doc = LoadedDocument::from_bytes("docs/questions/x.json", b"[42]".to_vec()).unwrap();
        let report = validate_loaded(&doc, BankKind::Track);
        assert_eq!(report.violations[0].to_string(), "x.json[0]: expected object, got number");
    }
}
