use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{Error, Result};

const STAGING_PREFIX: &str = ".unspool-";

/// Hidden sibling of the destination that becomes the destination on commit.
///
/// Dropping an uncommitted staging area removes it with everything in it.
pub struct Staging {
    dir: TempDir,
    destination: PathBuf,
}

impl Staging {
    pub fn new(destination: impl AsRef<Path>) -> Result<Self> {
        let destination = destination.as_ref().to_path_buf();
        let parent = destination
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        fs::create_dir_all(parent).map_err(|source| Error::OutputDirCreationFailed {
            path: parent.to_path_buf(),
            source,
        })?;

        let dir = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(parent)
            .map_err(|source| Error::StagingFailed {
                path: destination.clone(),
                source,
            })?;

        Ok(Self { dir, destination })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Move the staged tree into place.
    pub fn commit(self) -> Result<PathBuf> {
        let Self { dir, destination } = self;
        let staged = dir.keep();

        if let Err(source) = fs::rename(&staged, &destination) {
            let _ = fs::remove_dir_all(&staged);
            return Err(Error::StagingFailed {
                path: destination,
                source,
            });
        }

        Ok(destination)
    }
}
