use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve an archive entry name under `base`.
///
/// `.` components are dropped and `..` is folded into the preceding
/// component. Absolute names and names that climb above `base` are rejected.
pub fn resolve_entry_path(entry: &Path, base: &Path) -> Result<PathBuf> {
    let relative = normalize_relative(entry).ok_or_else(|| Error::UnsafeEntryPath {
        entry: entry.to_path_buf(),
    })?;
    Ok(base.join(relative))
}

fn normalize_relative(path: &Path) -> Option<PathBuf> {
    let mut parts: Vec<&std::ffi::OsStr> = Vec::new();

    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                parts.pop()?;
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    Some(parts.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> &'static Path {
        Path::new("/srv/expanded/1700000000")
    }

    #[test]
    fn plain_entry_resolves_under_base() {
        let resolved = resolve_entry_path(Path::new("foo/bar.txt"), base()).unwrap();
        assert_eq!(resolved, base().join("foo/bar.txt"));
    }

    #[test]
    fn current_dir_components_dropped() {
        let resolved = resolve_entry_path(Path::new("./foo/./bar.txt"), base()).unwrap();
        assert_eq!(resolved, base().join("foo/bar.txt"));
    }

    #[test]
    fn root_entry_resolves_to_base() {
        assert_eq!(resolve_entry_path(Path::new("./"), base()).unwrap(), base());
    }

    #[test]
    fn inner_parent_dir_folds() {
        let resolved = resolve_entry_path(Path::new("foo/../bar.txt"), base()).unwrap();
        assert_eq!(resolved, base().join("bar.txt"));
    }

    #[test]
    fn escaping_entry_rejected() {
        let result = resolve_entry_path(Path::new("../evil.txt"), base());
        assert!(matches!(result, Err(Error::UnsafeEntryPath { .. })));

        let result = resolve_entry_path(Path::new("foo/../../evil.txt"), base());
        assert!(matches!(result, Err(Error::UnsafeEntryPath { .. })));
    }

    #[test]
    #[cfg(unix)]
    fn absolute_entry_rejected() {
        let result = resolve_entry_path(Path::new("/etc/passwd"), base());
        assert!(matches!(result, Err(Error::UnsafeEntryPath { .. })));
    }
}
