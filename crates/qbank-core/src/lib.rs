//! # qbank-core: Foundational Types for qbank
//!
//! The leaf crate of the workspace. Every other `qbank-*` crate depends on
//! it; it depends on nothing internal.
//!
//! ## Contents
//!
//! 1. **Document loading.** [`load_document`] performs exactly one read of a
//!    content file and parses it as JSON. The raw bytes are kept alongside the
//!    parsed value because the manifest hashes what is on disk, not a
//!    re-serialization.
//!
//! 2. **Bank classification.** [`BankKind`] decides from the filename whether
//!    a file is a multiple-choice track or a PBQ bank.
//!
//! 3. **Content digests.** [`ContentDigest`] is a SHA-256 over raw file bytes.
//!
//! 4. **UTC-only timestamps.** [`Timestamp`] is seconds precision with a `Z`
//!    suffix, used for the manifest `generated_at` field.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `qbank-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod digest;
pub mod error;
pub mod kind;
pub mod loader;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use digest::{sha256_hex, ContentDigest};
pub use error::{LoadError, TimestampError};
pub use kind::{BankKind, DEFAULT_PBQ_SUFFIX};
pub use loader::{json_type_name, load_document, LoadedDocument};
pub use temporal::Timestamp;
