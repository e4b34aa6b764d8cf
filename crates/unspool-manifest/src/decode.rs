use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::record::ManifestRecord;

/// Read and decode one manifest file.
pub fn decode_manifest(path: impl AsRef<Path>) -> Result<ManifestRecord> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&data).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode every path in order, dropping the ones that fail.
pub fn decode_all<I, P>(paths: I) -> Vec<(PathBuf, ManifestRecord)>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .filter_map(|path| {
            let path = path.as_ref();
            match decode_manifest(path) {
                Ok(record) => Some((path.to_path_buf(), record)),
                Err(err) => {
                    debug!(error = %err, "skipping manifest");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest_1.json");
        fs::write(&path, r#"{"TimeEpoch":1700000000,"FileName":"a.tar"}"#).unwrap();

        let record = decode_manifest(&path).unwrap();

        assert_eq!(record.time_epoch, 1_700_000_000);
        assert_eq!(record.file_name, "a.tar");
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = decode_manifest(dir.path().join("manifest_missing.json"));
        assert!(matches!(result, Err(Error::Read { .. })));
    }

    #[test]
    fn malformed_json_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest_bad.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(decode_manifest(&path), Err(Error::Decode { .. })));
    }

    #[test]
    fn non_object_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest_list.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(matches!(decode_manifest(&path), Err(Error::Decode { .. })));
    }

    #[test]
    fn decode_all_skips_failures_and_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("manifest_1.json");
        let broken = dir.path().join("manifest_2.json");
        let last = dir.path().join("manifest_3.json");
        fs::write(&first, r#"{"TimeEpoch":1}"#).unwrap();
        fs::write(&broken, "garbage").unwrap();
        fs::write(&last, r#"{"TimeEpoch":3}"#).unwrap();

        let decoded = decode_all([&first, &broken, &last]);

        let epochs: Vec<i64> = decoded.iter().map(|(_, r)| r.time_epoch).collect();
        assert_eq!(epochs, vec![1, 3]);
        assert_eq!(decoded[0].0, first);
        assert_eq!(decoded[1].0, last);
    }
}
