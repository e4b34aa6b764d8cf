use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported archive format: '{path}'")]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to create output directory '{path}': {source}")]
    OutputDirCreationFailed { path: PathBuf, source: io::Error },

    #[error("failed to open '{path}': {source}")]
    SourceOpenFailed { path: PathBuf, source: io::Error },

    #[error("failed to initialize {codec} decompression for '{path}': {source}")]
    DecompressionInitFailed {
        path: PathBuf,
        codec: &'static str,
        source: io::Error,
    },

    #[error("failed to copy decompressed stream into '{path}': {source}")]
    StreamCopyFailed { path: PathBuf, source: io::Error },

    #[error("failed to extract '{entry}': {source}")]
    EntryExtractionFailed { entry: PathBuf, source: io::Error },

    #[error("entry '{entry}' escapes the output directory")]
    UnsafeEntryPath { entry: PathBuf },

    #[error("archive stream is corrupted: {source}")]
    Corrupted { source: io::Error },

    #[error("staging failed for '{path}': {source}")]
    StagingFailed { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
