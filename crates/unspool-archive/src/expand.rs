//! Per-kind expansion strategies.
//!
//! `.gz` and `.tar` stream straight into the shared tar extractor. `.xz` is
//! two passes: decompress to a file next to the extracted tree, then untar
//! that file when it is named `*.tar`.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::detect;
use crate::error::{Error, Result};
use crate::extract::extract_entries;
use crate::format::{ArchiveKind, Compression, Decoder};
use crate::options::ExpandOptions;
use crate::report::{Decompressed, ExpandReport, NestedTar};
use crate::staging::Staging;

/// Expand `input` into `output_dir` using the strategy for `kind`.
pub fn expand(
    kind: ArchiveKind,
    input: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    options: &ExpandOptions,
) -> Result<ExpandReport> {
    let input = input.as_ref();
    let output_dir = output_dir.as_ref();

    if !options.staged {
        return expand_in_place(kind, input, output_dir);
    }

    let staging = Staging::new(output_dir)?;
    let mut report = expand_in_place(kind, input, staging.path())?;

    // a staged tree is committed whole or not at all
    if let Some(Decompressed {
        nested: NestedTar::Failed(err),
        ..
    }) = report.decompressed
    {
        debug!(output = %output_dir.display(), "discarding staged output");
        return Err(*err);
    }

    let staged_root = staging.path().to_path_buf();
    staging.commit()?;

    report.output_dir = output_dir.to_path_buf();
    if let Some(decompressed) = report.decompressed.as_mut() {
        decompressed.path = rebase(&decompressed.path, &staged_root, output_dir);
    }
    Ok(report)
}

fn expand_in_place(kind: ArchiveKind, input: &Path, output_dir: &Path) -> Result<ExpandReport> {
    debug!(input = %input.display(), output = %output_dir.display(), "expanding {kind} file");

    fs::create_dir_all(output_dir).map_err(|source| Error::OutputDirCreationFailed {
        path: output_dir.to_path_buf(),
        source,
    })?;

    match kind {
        ArchiveKind::Xz => expand_xz(input, output_dir),
        ArchiveKind::TarGzip | ArchiveKind::Tar => expand_tarball(kind, input, output_dir),
        ArchiveKind::Unsupported => Err(Error::UnsupportedFormat {
            path: input.to_path_buf(),
        }),
    }
}

/// Decompress, then untar the result into the same directory when it is a
/// tarball. A failing untar step is recorded in the report only.
fn expand_xz(input: &Path, output_dir: &Path) -> Result<ExpandReport> {
    let mut decoder = open_decoder(input, Compression::Xz)?;

    let stem = input.file_stem().ok_or_else(|| Error::StreamCopyFailed {
        path: output_dir.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidInput, "input has no file name"),
    })?;
    let target = output_dir.join(stem);

    let bytes = {
        let mut output = File::create(&target).map_err(|source| Error::StreamCopyFailed {
            path: target.clone(),
            source,
        })?;
        io::copy(&mut decoder, &mut output).map_err(|source| Error::StreamCopyFailed {
            path: target.clone(),
            source,
        })?
    };

    let mut report = ExpandReport::new(ArchiveKind::Xz, output_dir);
    let nested = if ArchiveKind::from_path(&target) == ArchiveKind::Tar {
        match expand_tarball(ArchiveKind::Tar, &target, output_dir) {
            Ok(tar_report) => {
                debug!(
                    tar = %target.display(),
                    output = %output_dir.display(),
                    "TAR file expanded successfully"
                );
                report.stats = tar_report.stats;
                NestedTar::Expanded
            }
            Err(err) => {
                debug!(tar = %target.display(), error = %err, "error expanding TAR file");
                NestedTar::Failed(Box::new(err))
            }
        }
    } else {
        NestedTar::NotTar
    };

    report.decompressed = Some(Decompressed {
        path: target,
        bytes,
        nested,
    });
    Ok(report)
}

fn expand_tarball(kind: ArchiveKind, input: &Path, output_dir: &Path) -> Result<ExpandReport> {
    let compression = kind.compression().ok_or_else(|| Error::UnsupportedFormat {
        path: input.to_path_buf(),
    })?;
    let decoder = open_decoder(input, compression)?;

    let mut report = ExpandReport::new(kind, output_dir);
    report.stats = extract_entries(decoder, output_dir)?;
    Ok(report)
}

fn open_decoder(input: &Path, compression: Compression) -> Result<Decoder<File>> {
    let mut file = File::open(input).map_err(|source| Error::SourceOpenFailed {
        path: input.to_path_buf(),
        source,
    })?;

    let init_failed = |source: io::Error| Error::DecompressionInitFailed {
        path: input.to_path_buf(),
        codec: compression.name(),
        source,
    };

    detect::verify_header(&mut file, compression).map_err(init_failed)?;
    compression.decoder(file).ok_or_else(|| Error::UnsupportedFormat {
        path: input.to_path_buf(),
    })
}

fn rebase(path: &Path, from: &Path, to: &Path) -> PathBuf {
    match path.strip_prefix(from) {
        Ok(relative) => to.join(relative),
        Err(_) => path.to_path_buf(),
    }
}
