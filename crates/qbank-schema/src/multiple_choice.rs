//! # Multiple-Choice Validation
//!
//! Rules for track files. Each entry is an object with exactly the keys
//! `question`, `choices`, `answer`, `explanation` and optionally `tags`.
//!
//! A missing required field stops checks for that entry, since the rest
//! would only restate the gap. Every other check runs independently so one
//! pass reports everything wrong with an entry.

use qbank_core::json_type_name;
use serde_json::{Map, Value};

use crate::violation::{entry_location, Violation};

/// Keys every multiple-choice entry must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["question", "choices", "answer", "explanation"];

/// Every key a multiple-choice entry may carry.
pub const ALLOWED_FIELDS: [&str; 5] = ["question", "choices", "answer", "explanation", "tags"];

/// Minimum trimmed length, in characters, of `question` and `explanation`.
pub const MIN_TEXT_CHARS: usize = 8;

/// Inclusive bounds on the number of choices.
pub const CHOICES_RANGE: std::ops::RangeInclusive<usize> = 4..=6;

/// Validate a parsed track document.
pub fn validate_multiple_choice(file_name: &str, data: &Value) -> Vec<Violation> {
    let Some(entries) = data.as_array() else {
        return vec![Violation::root(
            "Root element must be a list of question objects",
        )];
    };

    let mut violations = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        let location = entry_location(file_name, idx);
        match entry.as_object() {
            Some(obj) => validate_entry(&location, obj, &mut violations),
            None => violations.push(Violation::at(
                &location,
                format!("expected object, got {}", json_type_name(entry)),
            )),
        }
    }
    violations
}

fn validate_entry(location: &str, obj: &Map<String, Value>, out: &mut Vec<Violation>) {
    let mut missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|k| !obj.contains_key(*k))
        .collect();
    if !missing.is_empty() {
        missing.sort_unstable();
        out.push(Violation::at(
            location,
            format!("missing required fields: {}", missing.join(", ")),
        ));
        return;
    }

    let mut unexpected: Vec<&str> = obj
        .keys()
        .map(String::as_str)
        .filter(|k| !ALLOWED_FIELDS.contains(k))
        .collect();
    if !unexpected.is_empty() {
        unexpected.sort_unstable();
        out.push(Violation::at(
            location,
            format!("unexpected keys: {}", unexpected.join(", ")),
        ));
    }

    if !is_descriptive(obj.get("question")) {
        out.push(Violation::at(
            location,
            "question must be a non-empty string with reasonable length",
        ));
    }

    let choices = obj.get("choices").and_then(Value::as_array);
    match choices {
        None => out.push(Violation::at(location, "choices must be a list")),
        Some(list) => {
            if !CHOICES_RANGE.contains(&list.len()) {
                out.push(Violation::at(
                    location,
                    format!(
                        "choices must contain between {} and {} entries (found {})",
                        CHOICES_RANGE.start(),
                        CHOICES_RANGE.end(),
                        list.len()
                    ),
                ));
            }
            if list.iter().any(|c| !is_non_blank(c)) {
                out.push(Violation::at(
                    location,
                    "choices must only contain non-empty strings",
                ));
            }
        }
    }

    match obj
        .get("answer")
        .and_then(Value::as_str)
        .filter(|a| !a.trim().is_empty())
    {
        None => out.push(Violation::at(location, "answer must be a non-empty string")),
        Some(answer) => {
            if let Some(list) = choices {
                if !list.iter().any(|c| c.as_str() == Some(answer)) {
                    out.push(Violation::at(
                        location,
                        format!("answer '{answer}' not found in choices"),
                    ));
                }
            }
        }
    }

    if !is_descriptive(obj.get("explanation")) {
        out.push(Violation::at(location, "explanation must be descriptive text"));
    }

    // An explicit null is treated as absent.
    if let Some(tags) = obj.get("tags").filter(|t| !t.is_null()) {
        let valid = tags
            .as_array()
            .is_some_and(|list| list.iter().all(is_non_blank));
        if !valid {
            out.push(Violation::at(
                location,
                "tags must be a list of non-empty strings when provided",
            ));
        }
    }
}

fn is_descriptive(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| s.trim().chars().count() >= MIN_TEXT_CHARS)
}

fn is_non_blank(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.trim().is_empty())
}
