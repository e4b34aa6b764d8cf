use serde::{Deserialize, Serialize};

/// One `manifest_*.json` descriptor.
///
/// Absent fields decode to their zero value; nothing is validated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestRecord {
    /// Seconds since the Unix epoch.
    #[serde(rename = "TimeEpoch")]
    pub time_epoch: i64,
    #[serde(rename = "TimeRFC3339")]
    pub time_rfc3339: String,
    #[serde(rename = "SHA")]
    pub sha: String,
    #[serde(rename = "ShortSHA")]
    pub short_sha: String,
    /// Archive name, relative to the logs root.
    #[serde(rename = "FileName")]
    pub file_name: String,
    #[serde(rename = "RepoHost")]
    pub repo_host: String,
    #[serde(rename = "RepoPath")]
    pub repo_path: String,
}
