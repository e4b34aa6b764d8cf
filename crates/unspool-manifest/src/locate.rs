use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::warn;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Base-name glob every manifest descriptor matches.
pub const MANIFEST_PATTERN: &str = "manifest_*.json";

/// How traversal errors below the root are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Abort the scan on the first unreadable entry.
    #[default]
    FailFast,
    /// Record the error and keep walking the rest of the tree.
    BestEffort,
}

#[derive(Debug, Default)]
pub struct ScanReport {
    pub matches: Vec<PathBuf>,
    pub warnings: Vec<walkdir::Error>,
}

/// Recursively collect manifest files under `root`.
///
/// Directories are never returned, even when their name matches.
pub fn find_manifests(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    scan_manifests(root, ScanMode::FailFast).map(|report| report.matches)
}

pub fn scan_manifests(root: impl AsRef<Path>, mode: ScanMode) -> Result<ScanReport> {
    scan_matching(root, MANIFEST_PATTERN, mode)
}

/// Walk `root` collecting non-directory entries whose base name matches the
/// glob `pattern`.
pub fn scan_matching(root: impl AsRef<Path>, pattern: &str, mode: ScanMode) -> Result<ScanReport> {
    let root = root.as_ref();
    let pattern = Pattern::new(pattern).map_err(|source| Error::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;
    let mut report = ScanReport::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if mode == ScanMode::BestEffort && source.depth() > 0 => {
                warn!(root = %root.display(), error = %source, "skipping unreadable entry");
                report.warnings.push(source);
                continue;
            }
            Err(source) => {
                return Err(Error::Traversal {
                    root: root.to_path_buf(),
                    source,
                });
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        if entry
            .file_name()
            .to_str()
            .is_some_and(|name| pattern.matches(name))
        {
            report.matches.push(entry.into_path());
        }
    }

    Ok(report)
}
