//! Matching PBQs: every pair answer must name an option id.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::violation::{id_key, quoted, Violation};

const PAIR_FIELDS: [&str; 3] = ["id", "left", "answer"];

pub(super) fn validate(location: &str, entry: &Map<String, Value>) -> Vec<Violation> {
    let mut out = Vec::new();

    let Some(pairs) = non_empty_list(entry, "pairs") else {
        out.push(Violation::at(
            location,
            "matching PBQ must include at least one pair",
        ));
        return out;
    };
    let Some(options) = non_empty_list(entry, "options") else {
        out.push(Violation::at(
            location,
            "matching PBQ must include selectable 'options'",
        ));
        return out;
    };

    let mut option_ids = BTreeSet::new();
    for option in options {
        let id = option
            .as_object()
            .and_then(|opt| opt.get("id").filter(|_| opt.contains_key("label")));
        match id {
            Some(id) => {
                option_ids.insert(id_key(id));
            }
            None => out.push(Violation::at(
                location,
                "options must contain objects with 'id' and 'label'",
            )),
        }
    }

    for pair in pairs {
        let Some(pair) = pair.as_object() else {
            out.push(Violation::at(location, "each pair must be an object"));
            continue;
        };
        for field in PAIR_FIELDS {
            if !pair.contains_key(field) {
                out.push(Violation::at(
                    location,
                    format!("matching pairs require '{field}'"),
                ));
            }
        }
        if let Some(answer) = pair.get("answer") {
            if !option_ids.contains(&id_key(answer)) {
                out.push(Violation::at(
                    location,
                    format!("pair answer {} not found in options", quoted(answer)),
                ));
            }
        }
    }

    out
}

fn non_empty_list<'a>(entry: &'a Map<String, Value>, key: &str) -> Option<&'a Vec<Value>> {
    entry
        .get(key)
        .and_then(Value::as_array)
        .filter(|list| !list.is_empty())
}
