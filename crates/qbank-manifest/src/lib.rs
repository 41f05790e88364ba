//! # qbank-manifest: Content Manifest
//!
//! Summarizes a validated corpus for downstream tooling that should not
//! re-parse the raw banks:
//!
//! ```text
//! Manifest
//! ├── generated_at            UTC, YYYY-MM-DDTHH:MM:SSZ
//! ├── tracks/<id>             file, count, tags{tag: n}, sha256
//! └── pbqs/<id> (optional)    file, count, sha256, titles?, meta?
//! ```
//!
//! [`ManifestBuilder`] is a plain accumulator: the orchestrator feeds it
//! each file that passed validation and calls [`ManifestBuilder::build`] once
//! at the end. [`write_if_changed`] persists the result without touching the
//! file when nothing but the timestamp would differ.
//!
//! ## Determinism
//!
//! Every map is a `BTreeMap` and struct fields are declared in key order,
//! so the rendered JSON has sorted keys regardless of serde_json features.
//! Output is two-space indented with a trailing newline.

pub mod builder;
pub mod catalog;
pub mod error;
pub mod model;
pub mod writer;

pub use builder::ManifestBuilder;
pub use catalog::{lookup as catalog_lookup, TRACK_CATALOG};
pub use error::ManifestError;
pub use model::{Manifest, PbqEntry, PbqMeta, TrackEntry};
pub use writer::{render, write_if_changed, WriteOutcome};
