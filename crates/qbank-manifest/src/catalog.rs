//! Static descriptive metadata for the known certification tracks.
//!
//! PBQ banks are named after the track they belong to
//! (`aplus-1201-pbq.json` → `aplus-1201`), so the derived identifier is
//! the lookup key.

use crate::model::PbqMeta;

/// `(identifier, title, summary)` for every known track.
pub const TRACK_CATALOG: [(&str, &str, &str); 4] = [
    (
        "aplus-1201",
        "CompTIA A+ 220-1201",
        "Core 1 essentials: mobile, networking, hardware, virtualization, cloud, and troubleshooting.",
    ),
    (
        "aplus-1202",
        "CompTIA A+ 220-1202",
        "Core 2 coverage: operating systems, security, software troubleshooting, and operational procedures.",
    ),
    (
        "networkplus",
        "CompTIA Network+",
        "Network design, implementation, operations, security, and troubleshooting.",
    ),
    (
        "securityplus",
        "CompTIA Security+",
        "Threats, architecture, implementation, operations, and governance/risk compliance.",
    ),
];

/// Metadata for `identifier`, if it names a known track.
pub fn lookup(identifier: &str) -> Option<PbqMeta> {
    TRACK_CATALOG
        .iter()
        .find(|(id, _, _)| *id == identifier)
        .map(|(_, title, summary)| PbqMeta {
            summary: (*summary).to_string(),
            title: (*title).to_string(),
        })
}
