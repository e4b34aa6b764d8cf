//! Manifest discovery and decoding.
//!
//! A logs root holds `manifest_*.json` descriptors (at any depth), each
//! naming an archive that sits directly in the root.

pub use decode::{decode_all, decode_manifest};
pub use error::{Error, Result};
pub use locate::{
    MANIFEST_PATTERN, ScanMode, ScanReport, find_manifests, scan_manifests, scan_matching,
};
pub use record::ManifestRecord;

mod decode;
mod error;
mod locate;
mod record;
