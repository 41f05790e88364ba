//! # Bank Kind
//!
//! Content files come in two shapes, told apart only by filename: PBQ banks
//! end in `pbq.json` (`aplus-1201-pbq.json`), everything else ending in
//! `.json` is a multiple-choice track (`networkplus.json`).

use serde::{Deserialize, Serialize};

/// Filename suffix that marks a PBQ bank.
pub const DEFAULT_PBQ_SUFFIX: &str = "pbq.json";

/// The two logical shapes of a content file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BankKind {
    /// A multiple-choice question bank.
    Track,
    /// A performance-based question bank.
    Pbq,
}

impl BankKind {
    /// Classify a file by name using `pbq_suffix`.
    pub fn classify(file_name: &str, pbq_suffix: &str) -> Self {
        if file_name.ends_with(pbq_suffix) {
            Self::Pbq
        } else {
            Self::Track
        }
    }

    /// Derive the manifest identifier for a file of this kind.
    ///
    /// Tracks use the file stem. PBQ banks drop `pbq_suffix` along with any
    /// separator left dangling before it, so `aplus-1201-pbq.json` becomes
    /// `aplus-1201`. A name that is nothing but the suffix maps to `pbq`.
    pub fn identifier(&self, file_name: &str, pbq_suffix: &str) -> String {
        match self {
            Self::Track => file_name
                .strip_suffix(".json")
                .unwrap_or(file_name)
                .to_string(),
            Self::Pbq => {
                let base = file_name
                    .strip_suffix(pbq_suffix)
                    .unwrap_or(file_name)
                    .trim_end_matches(['-', '_', '.']);
                if base.is_empty() {
                    "pbq".to_string()
                } else {
                    base.to_string()
                }
            }
        }
    }

    /// Lowercase label used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Track => "track",
            Self::Pbq => "pbq",
        }
    }
}

impl std::fmt::Display for BankKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
