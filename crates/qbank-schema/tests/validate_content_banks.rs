//! Integration test: validate every bank under `docs/questions/`.
//!
//! The sample corpus in the repository must always pass. Track banks are
//! also checked against `docs/questions/schema.json` with a JSON Schema
//! validator, so the published schema and the hand-written rules cannot
//! drift apart on well-formed content.

use std::path::{Path, PathBuf};

use qbank_core::{load_document, BankKind, DEFAULT_PBQ_SUFFIX};
use qbank_schema::{validate_document, validate_loaded};
use serde_json::{json, Value};

/// Find the repository root.
fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir
}

fn question_dir() -> PathBuf {
    repo_root().join("docs").join("questions")
}

fn content_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .expect("docs/questions must exist")
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|e| e == "json"))
        .filter(|p| {
            let name = p.file_name().unwrap().to_string_lossy();
            name != "schema.json" && name != "manifest.json"
        })
        .collect();
    files.sort();
    files
}

#[test]
fn all_sample_banks_are_valid() {
    let files = content_files(&question_dir());
    assert!(files.len() >= 3, "expected sample banks, found {}", files.len());

    let mut failures = Vec::new();
    for path in &files {
        let doc = load_document(path).unwrap();
        let kind = BankKind::classify(&doc.file_name(), DEFAULT_PBQ_SUFFIX);
        let report = validate_loaded(&doc, kind);
        for v in &report.violations {
            failures.push(format!("{}: {v}", path.display()));
        }
        assert!(report.entry_count > 0, "{} is empty", path.display());
    }
    assert!(failures.is_empty(), "violations:\n{}", failures.join("\n"));
}

#[test]
fn track_banks_conform_to_published_schema() {
    let schema: Value =
        serde_json::from_slice(&std::fs::read(question_dir().join("schema.json")).unwrap())
            .unwrap();
    let validator = jsonschema::validator_for(&schema).expect("schema.json must compile");

    for path in content_files(&question_dir()) {
        let doc = load_document(&path).unwrap();
        if BankKind::classify(&doc.file_name(), DEFAULT_PBQ_SUFFIX) != BankKind::Track {
            continue;
        }
        let errors: Vec<String> = validator
            .iter_errors(doc.value())
            .map(|e| format!("{}: {e}", e.instance_path))
            .collect();
        assert!(
            errors.is_empty(),
            "{} violates schema.json:\n{}",
            path.display(),
            errors.join("\n")
        );
    }
}

#[test]
fn published_schema_rejects_what_the_rules_reject() {
    let schema: Value =
        serde_json::from_slice(&std::fs::read(question_dir().join("schema.json")).unwrap())
            .unwrap();
    let validator = jsonschema::validator_for(&schema).unwrap();

    let too_few_choices = json!([{
        "question": "What is DHCP?",
        "choices": ["A", "B", "C"],
        "answer": "B",
        "explanation": "DHCP assigns addresses"
    }]);
    assert!(!validator.is_valid(&too_few_choices));
    assert!(!validate_document(BankKind::Track, "x.json", &too_few_choices).is_valid());

    let extra_key = json!([{
        "question": "What is DHCP?",
        "choices": ["A", "B", "C", "D"],
        "answer": "B",
        "explanation": "DHCP assigns addresses",
        "difficulty": 3
    }]);
    assert!(!validator.is_valid(&extra_key));
    assert!(!validate_document(BankKind::Track, "x.json", &extra_key).is_valid());
}

#[test]
fn dhcp_example_has_one_entry_and_no_errors() {
    let data = json!([{
        "question": "What is DHCP?",
        "choices": ["A", "B", "C", "D"],
        "answer": "B",
        "explanation": "DHCP assigns addresses"
    }]);
    let report = validate_document(BankKind::Track, "x.json", &data);
    assert!(report.is_valid());
    assert_eq!(report.entry_count, 1);
}

#[test]
fn dhcp_example_with_wrong_answer_has_exactly_one_error() {
    let data = json!([{
        "question": "What is DHCP?",
        "choices": ["A", "B", "C", "D"],
        "answer": "Z",
        "explanation": "DHCP assigns addresses"
    }]);
    let report = validate_document(BankKind::Track, "x.json", &data);
    assert_eq!(report.violations.len(), 1);
    let msg = report.violations[0].to_string();
    assert!(msg.contains("answer") && msg.contains("choices"), "{msg}");
}

#[test]
fn command_pbq_with_empty_expected() {
    let data = json!([{
        "id": "c1",
        "title": "Empty",
        "type": "command",
        "prompt": "Type something.",
        "explanation": "Nothing is accepted.",
        "expected": []
    }]);
    let report = validate_document(BankKind::Pbq, "x-pbq.json", &data);
    assert_eq!(report.violations.len(), 1);
    let msg = &report.violations[0].message;
    assert!(msg.contains("expected") && msg.contains("non-empty"), "{msg}");
}

#[test]
fn matching_pbq_with_dangling_answer_names_the_id() {
    let data = json!([{
        "id": "m1",
        "title": "Ports",
        "type": "matching",
        "prompt": "Match them.",
        "explanation": "Defaults.",
        "options": [{"id": "p22", "label": "22"}],
        "pairs": [{"id": "ssh", "left": "SSH", "answer": "p2222"}]
    }]);
    let report = validate_document(BankKind::Pbq, "x-pbq.json", &data);
    assert_eq!(report.violations.len(), 1);
    assert!(report.violations[0].message.contains("p2222"));
}

#[test]
fn mixed_bank_reports_every_problem_in_order() {
    let data = json!([
        {
            "id": "o1",
            "title": "Order",
            "type": "ordering",
            "prompt": "Order.",
            "explanation": "Because.",
            "items": [{"id": "a", "label": "A"}, {"id": "b", "label": "B"}],
            "solution": ["a"]
        },
        "not an object",
        {
            "id": "c1",
            "title": "Cmd",
            "type": "command",
            "prompt": "Type.",
            "explanation": "Because.",
            "expected": [""]
        }
    ]);
    let lines: Vec<String> = validate_document(BankKind::Pbq, "mix-pbq.json", &data)
        .violations
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        lines,
        vec![
            "mix-pbq.json[0]: solution must list each item id exactly once",
            "mix-pbq.json[1]: expected object, got string",
            "mix-pbq.json[2]: expected commands must be non-empty strings",
        ]
    );
}
