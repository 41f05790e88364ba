//! Manifest document types.
//!
//! Fields are declared in alphabetical order so serialization emits
//! sorted keys.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The top-level manifest document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// When the manifest content was produced (`YYYY-MM-DDTHH:MM:SSZ`).
    pub generated_at: String,
    /// PBQ banks by derived identifier. Absent when no PBQ bank was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pbqs: Option<BTreeMap<String, PbqEntry>>,
    /// Multiple-choice tracks by identifier.
    pub tracks: BTreeMap<String, TrackEntry>,
}

impl Manifest {
    /// The same manifest with a different `generated_at`.
    pub fn with_generated_at(&self, generated_at: impl Into<String>) -> Self {
        Self {
            generated_at: generated_at.into(),
            ..self.clone()
        }
    }

    /// Total entries across all tracks and PBQ banks.
    pub fn total_entries(&self) -> usize {
        let tracks: usize = self.tracks.values().map(|t| t.count).sum();
        let pbqs: usize = self
            .pbqs
            .iter()
            .flat_map(|m| m.values())
            .map(|p| p.count)
            .sum();
        tracks + pbqs
    }
}

/// Summary of one multiple-choice track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackEntry {
    /// Number of questions.
    pub count: usize,
    /// Path relative to the project root, `/`-separated.
    pub file: String,
    /// SHA-256 of the raw file bytes, lowercase hex.
    pub sha256: String,
    /// Tag occurrence counts across all questions.
    pub tags: BTreeMap<String, u64>,
}

/// Summary of one PBQ bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PbqEntry {
    /// Number of PBQs.
    pub count: usize,
    /// Path relative to the project root, `/`-separated.
    pub file: String,
    /// Descriptive metadata for the track this bank belongs to, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PbqMeta>,
    /// SHA-256 of the raw file bytes, lowercase hex.
    pub sha256: String,
    /// PBQ titles in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub titles: Vec<String>,
}

/// Static descriptive metadata for a known track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PbqMeta {
    /// One-line description of the exam coverage.
    pub summary: String,
    /// Display title of the exam.
    pub title: String,
}
