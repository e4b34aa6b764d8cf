//! Layered archive expansion: classify, decompress, untar.
//!
//! # Architecture
//!
//! - `format.rs` - Extension classification and codec decoders
//! - `detect.rs` - Magic-header checks
//! - `sanitize.rs` - Entry path resolution (zip-slip prevention)
//! - `extract.rs` - Shared tar entry extractor
//! - `expand.rs` - Per-kind strategies
//! - `staging.rs` - Optional two-phase output directory
//! - `report.rs` - Expansion results

pub use error::{Error, Result};
pub use expand::expand;
pub use extract::extract_entries;
pub use format::{ArchiveKind, Compression};
pub use options::ExpandOptions;
pub use report::{Decompressed, EntryKind, ExpandReport, ExtractStats, NestedTar, SkippedEntry};

pub mod detect;
mod error;
mod expand;
mod extract;
pub mod format;
mod options;
mod report;
mod sanitize;
mod staging;
