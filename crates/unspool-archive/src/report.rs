use std::path::PathBuf;

use crate::error::Error;
use crate::format::ArchiveKind;

/// Tar entry kind as far as extraction cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    Hardlink,
    /// Devices, fifos and anything else; carries the raw type byte.
    Other(u8),
}

impl From<tar::EntryType> for EntryKind {
    fn from(entry_type: tar::EntryType) -> Self {
        match entry_type {
            tar::EntryType::Directory => Self::Directory,
            tar::EntryType::Regular | tar::EntryType::Continuous | tar::EntryType::GNUSparse => {
                Self::File
            }
            tar::EntryType::Symlink => Self::Symlink,
            tar::EntryType::Link => Self::Hardlink,
            other => Self::Other(other.as_byte()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Counters from one pass over a tar stream.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub directories: usize,
    pub files: usize,
    pub total_bytes: u64,
    pub skipped: Vec<SkippedEntry>,
}

impl ExtractStats {
    pub fn entry_count(&self) -> usize {
        self.directories + self.files + self.skipped.len()
    }
}

/// What happened to the tarball produced by an xz pass.
#[derive(Debug)]
pub enum NestedTar {
    /// The decompressed file does not end in `.tar`.
    NotTar,
    Expanded,
    /// Nested failures are recorded, never propagated.
    Failed(Box<Error>),
}

/// Output of the xz decompression pass.
#[derive(Debug)]
pub struct Decompressed {
    pub path: PathBuf,
    pub bytes: u64,
    pub nested: NestedTar,
}

#[derive(Debug)]
pub struct ExpandReport {
    pub kind: ArchiveKind,
    pub output_dir: PathBuf,
    pub stats: ExtractStats,
    pub decompressed: Option<Decompressed>,
}

impl ExpandReport {
    pub fn new(kind: ArchiveKind, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            output_dir: output_dir.into(),
            stats: ExtractStats::default(),
            decompressed: None,
        }
    }

    pub fn nested_error(&self) -> Option<&Error> {
        match &self.decompressed {
            Some(Decompressed {
                nested: NestedTar::Failed(err),
                ..
            }) => Some(err),
            _ => None,
        }
    }
}
