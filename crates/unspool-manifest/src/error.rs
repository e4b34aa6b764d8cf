use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid file name pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("failed to walk '{root}': {source}")]
    Traversal {
        root: PathBuf,
        source: walkdir::Error,
    },

    #[error("failed to read manifest '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to decode manifest '{path}': {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
