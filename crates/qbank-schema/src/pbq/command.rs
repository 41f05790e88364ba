//! Command PBQs: a non-empty list of accepted command strings.

use serde_json::{Map, Value};

use crate::violation::Violation;

pub(super) fn validate(location: &str, entry: &Map<String, Value>) -> Vec<Violation> {
    let mut out = Vec::new();

    let Some(expected) = entry
        .get("expected")
        .and_then(Value::as_array)
        .filter(|list| !list.is_empty())
    else {
        out.push(Violation::at(
            location,
            "command PBQ must define a non-empty 'expected' command list",
        ));
        return out;
    };

    if expected
        .iter()
        .any(|cmd| !cmd.as_str().is_some_and(|s| !s.trim().is_empty()))
    {
        out.push(Violation::at(
            location,
            "expected commands must be non-empty strings",
        ));
    }

    if let Some(placeholder) = entry.get("placeholder").filter(|p| !p.is_null()) {
        if !placeholder.is_string() {
            out.push(Violation::at(
                location,
                "placeholder must be a string when provided",
            ));
        }
    }

    out
}
