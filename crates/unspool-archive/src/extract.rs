//! Tar entry extraction shared by every strategy.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use tracing::trace;

use crate::error::{Error, Result};
use crate::report::{EntryKind, ExtractStats, SkippedEntry};
use crate::sanitize;

/// Unpack every tar entry in `reader` into `output_dir`, in stored order.
///
/// Directories and regular files are materialized; every other entry kind is
/// skipped and recorded. The first failure aborts the pass and anything
/// already written stays on disk.
pub fn extract_entries<R: Read>(reader: R, output_dir: &Path) -> Result<ExtractStats> {
    let mut archive = tar::Archive::new(reader);
    let mut stats = ExtractStats::default();

    let entries = archive
        .entries()
        .map_err(|source| Error::Corrupted { source })?;

    for entry in entries {
        let mut entry = entry.map_err(|source| Error::Corrupted { source })?;
        let name = entry
            .path()
            .map_err(|source| Error::Corrupted { source })?
            .into_owned();
        let kind = EntryKind::from(entry.header().entry_type());

        match kind {
            EntryKind::Directory => {
                let target = sanitize::resolve_entry_path(&name, output_dir)?;
                ensure_directory(&target).map_err(|source| Error::EntryExtractionFailed {
                    entry: name.clone(),
                    source,
                })?;
                stats.directories += 1;
            }
            EntryKind::File => {
                let target = sanitize::resolve_entry_path(&name, output_dir)?;
                let written = write_file(&mut entry, &target).map_err(|source| {
                    Error::EntryExtractionFailed {
                        entry: name.clone(),
                        source,
                    }
                })?;
                stats.files += 1;
                stats.total_bytes += written;
            }
            other => {
                trace!(entry = %name.display(), kind = ?other, "skipping tar entry");
                stats.skipped.push(SkippedEntry { path: name, kind: other });
                continue;
            }
        }

        trace!(entry = %name.display(), kind = ?kind, "extracted tar entry");
    }

    Ok(stats)
}

fn ensure_directory(path: &Path) -> io::Result<()> {
    if !path.is_dir() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn write_file<R: Read>(reader: &mut R, target: &Path) -> io::Result<u64> {
    if let Some(parent) = target.parent() {
        ensure_directory(parent)?;
    }

    let mut file = File::create(target)?;
    io::copy(reader, &mut file)
}
