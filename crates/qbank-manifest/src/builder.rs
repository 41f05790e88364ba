//! Manifest accumulator.

use std::collections::BTreeMap;

use qbank_core::{BankKind, LoadedDocument, Timestamp, DEFAULT_PBQ_SUFFIX};
use serde_json::Value;

use crate::catalog;
use crate::model::{Manifest, PbqEntry, TrackEntry};

/// Collects per-file summaries across one validation run.
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    pbq_suffix: String,
    tracks: BTreeMap<String, TrackEntry>,
    pbqs: BTreeMap<String, PbqEntry>,
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_PBQ_SUFFIX)
    }
}

impl ManifestBuilder {
    /// An empty builder. `pbq_suffix` is used to derive PBQ identifiers.
    pub fn new(pbq_suffix: impl Into<String>) -> Self {
        Self {
            pbq_suffix: pbq_suffix.into(),
            tracks: BTreeMap::new(),
            pbqs: BTreeMap::new(),
        }
    }

    /// Record a document that passed validation.
    ///
    /// `relative_path` is stored verbatim as the entry's `file`. A second
    /// document with the same identifier replaces the first.
    pub fn record(&mut self, doc: &LoadedDocument, kind: BankKind, relative_path: &str) {
        let id = kind.identifier(&doc.file_name(), &self.pbq_suffix);
        let sha256 = doc.digest().to_hex();
        let count = doc.entry_count();

        let replaced = match kind {
            BankKind::Track => self
                .tracks
                .insert(
                    id.clone(),
                    TrackEntry {
                        count,
                        file: relative_path.to_string(),
                        sha256,
                        tags: tag_histogram(doc.value()),
                    },
                )
                .is_some(),
            BankKind::Pbq => self
                .pbqs
                .insert(
                    id.clone(),
                    PbqEntry {
                        count,
                        file: relative_path.to_string(),
                        meta: catalog::lookup(&id),
                        sha256,
                        titles: titles(doc.value()),
                    },
                )
                .is_some(),
        };

        if replaced {
            tracing::warn!(
                id = %id,
                kind = %kind,
                file = relative_path,
                "duplicate manifest identifier; later file wins"
            );
        }
        tracing::debug!(id = %id, kind = %kind, entries = count, "recorded manifest entry");
    }

    /// Number of tracks recorded.
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Number of PBQ banks recorded.
    pub fn pbq_count(&self) -> usize {
        self.pbqs.len()
    }

    /// Assemble the manifest. `pbqs` is omitted when none were recorded.
    pub fn build(&self, generated_at: Timestamp) -> Manifest {
        Manifest {
            generated_at: generated_at.to_iso8601(),
            pbqs: (!self.pbqs.is_empty()).then(|| self.pbqs.clone()),
            tracks: self.tracks.clone(),
        }
    }
}

/// Count every string tag across all object entries.
fn tag_histogram(data: &Value) -> BTreeMap<String, u64> {
    let mut histogram = BTreeMap::new();
    let tags = data
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|entry| entry.get("tags"))
        .filter_map(Value::as_array)
        .flatten()
        .filter_map(Value::as_str);
    for tag in tags {
        *histogram.entry(tag.to_string()).or_insert(0) += 1;
    }
    histogram
}

/// String `title` values of object entries, in document order.
fn titles(data: &Value) -> Vec<String> {
    data.as_array()
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
        .filter_map(|entry| entry.get("title"))
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}
