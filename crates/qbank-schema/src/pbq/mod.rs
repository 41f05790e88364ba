//! # Performance-Based Question Validation
//!
//! A PBQ bank is a list of objects sharing five required fields (`id`,
//! `title`, `type`, `prompt`, `explanation`) and tagged by `type`. Each
//! [`PbqKind`] carries its own rule set:
//!
//! | Kind       | Fields                                        |
//! |------------|-----------------------------------------------|
//! | `ordering` | `items: [{id, label}]`, `solution: [id]`      |
//! | `matching` | `options: [{id, label}]`, `pairs: [{id, left, answer}]` |
//! | `command`  | `expected: [string]`, `placeholder?: string`  |
//!
//! Ids are compared as JSON values, so `"1"` and `1` are different ids.

mod command;
mod matching;
mod ordering;

use std::str::FromStr;

use qbank_core::json_type_name;
use serde_json::{Map, Value};

use crate::violation::{entry_location, quoted, Violation};

/// Fields every PBQ entry must carry regardless of kind.
pub const COMMON_FIELDS: [&str; 5] = ["id", "title", "type", "prompt", "explanation"];

/// The three PBQ variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PbqKind {
    /// Put items into the correct sequence.
    Ordering,
    /// Match each left-hand prompt to one option.
    Matching,
    /// Type a command from an accepted set.
    Command,
}

impl PbqKind {
    /// All kinds, sorted by their `type` string.
    pub const ALL: [PbqKind; 3] = [Self::Command, Self::Matching, Self::Ordering];

    /// The `type` string that selects this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ordering => "ordering",
            Self::Matching => "matching",
            Self::Command => "command",
        }
    }

    /// Run this kind's rules against one entry.
    fn validate(&self, location: &str, entry: &Map<String, Value>) -> Vec<Violation> {
        match self {
            Self::Ordering => ordering::validate(location, entry),
            Self::Matching => matching::validate(location, entry),
            Self::Command => command::validate(location, entry),
        }
    }
}

impl FromStr for PbqKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown PBQ type '{s}'"))
    }
}

impl std::fmt::Display for PbqKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a parsed PBQ document.
pub fn validate_pbq(file_name: &str, data: &Value) -> Vec<Violation> {
    let Some(entries) = data.as_array() else {
        return vec![Violation::root("Root element must be a list of PBQ objects")];
    };

    let mut violations = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        let location = entry_location(file_name, idx);
        let Some(obj) = entry.as_object() else {
            violations.push(Violation::at(
                &location,
                format!("expected object, got {}", json_type_name(entry)),
            ));
            continue;
        };

        for field in COMMON_FIELDS {
            if !obj.contains_key(field) {
                violations.push(Violation::at(
                    &location,
                    format!("missing required field '{field}'"),
                ));
            }
        }

        let kind = obj
            .get("type")
            .and_then(Value::as_str)
            .and_then(|t| t.parse::<PbqKind>().ok());
        match kind {
            Some(kind) => violations.extend(kind.validate(&location, obj)),
            None => {
                let names: Vec<&str> = PbqKind::ALL.iter().map(PbqKind::as_str).collect();
                let got = obj.get("type").map_or_else(|| "null".to_string(), quoted);
                violations.push(Violation::at(
                    &location,
                    format!("type must be one of [{}], got {got}", names.join(", ")),
                ));
            }
        }
    }
    violations
}
