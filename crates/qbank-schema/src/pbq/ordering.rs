//! Ordering PBQs: `solution` must be a permutation of the item ids.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::violation::{id_key, quoted, Violation};

pub(super) fn validate(location: &str, entry: &Map<String, Value>) -> Vec<Violation> {
    let mut out = Vec::new();

    let Some(items) = entry
        .get("items")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
    else {
        out.push(Violation::at(
            location,
            "ordering PBQ must define a non-empty 'items' list",
        ));
        return out;
    };

    let mut item_ids: Vec<&Value> = Vec::with_capacity(items.len());
    let mut seen = BTreeSet::new();
    for item in items {
        let Some(item) = item.as_object() else {
            out.push(Violation::at(location, "each ordering item must be an object"));
            continue;
        };
        match item.get("id") {
            Some(id) if item.contains_key("label") => {
                if !seen.insert(id_key(id)) {
                    out.push(Violation::at(
                        location,
                        format!("duplicate ordering item id {}", quoted(id)),
                    ));
                }
                item_ids.push(id);
            }
            _ => out.push(Violation::at(
                location,
                "ordering items require 'id' and 'label'",
            )),
        }
    }

    match entry.get("solution").and_then(Value::as_array) {
        Some(solution) if solution.len() == item_ids.len() => {
            let solution_keys: BTreeSet<String> = solution.iter().map(id_key).collect();
            let missing: Vec<String> = item_ids
                .iter()
                .filter(|id| !solution_keys.contains(&id_key(id)))
                .map(|id| quoted(id))
                .collect();
            let unknown: Vec<String> = solution
                .iter()
                .filter(|id| !seen.contains(&id_key(id)))
                .map(quoted)
                .collect();
            if !missing.is_empty() || !unknown.is_empty() {
                let mut detail = Vec::new();
                if !missing.is_empty() {
                    detail.push(format!("missing {}", missing.join(", ")));
                }
                if !unknown.is_empty() {
                    detail.push(format!("unknown {}", unknown.join(", ")));
                }
                out.push(Violation::at(
                    location,
                    format!(
                        "solution IDs must match the provided items ({})",
                        detail.join("; ")
                    ),
                ));
            }
        }
        _ => out.push(Violation::at(
            location,
            "solution must list each item id exactly once",
        )),
    }

    out
}
