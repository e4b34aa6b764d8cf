use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, ensure};
use unspool_archive::ExpandOptions;
use unspool_manifest::ScanMode;

use crate::cli::Cli;

pub const DEFAULT_LOGS_ROOT: &str = "data/logs";
pub const EXPANDED_DIR: &str = "expanded";

/// Resolved settings handed to the orchestrator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub logs_root: PathBuf,
    /// Always absolute.
    pub expanded_root: PathBuf,
    pub scan_mode: ScanMode,
    pub expand: ExpandOptions,
}

impl Config {
    pub fn new(logs_root: impl Into<PathBuf>, expanded_root: Option<PathBuf>) -> Result<Self> {
        let logs_root = logs_root.into();
        ensure!(
            !logs_root.as_os_str().is_empty(),
            "logs root must not be empty"
        );

        let expanded_root = expanded_root.unwrap_or_else(|| logs_root.join(EXPANDED_DIR));
        ensure!(
            !expanded_root.as_os_str().is_empty(),
            "expanded root must not be empty"
        );
        let expanded_root = std::path::absolute(&expanded_root)
            .with_context(|| format!("failed to resolve '{}'", expanded_root.display()))?;

        Ok(Self {
            logs_root,
            expanded_root,
            scan_mode: ScanMode::default(),
            expand: ExpandOptions::default(),
        })
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = Self::new(&cli.logs_root, cli.expanded_root.clone())?;
        config.expand = config.expand.staged(cli.staged);
        if cli.best_effort_scan {
            config.scan_mode = ScanMode::BestEffort;
        }
        Ok(config)
    }

    /// `<expanded_root>/<epoch>`.
    pub fn output_dir(&self, epoch: i64) -> PathBuf {
        self.expanded_root.join(epoch.to_string())
    }

    /// `<logs_root>/<file_name>`, always inside `logs_root`.
    ///
    /// Root, prefix, `.` and `..` components of `file_name` are dropped.
    pub fn input_file(&self, file_name: impl AsRef<Path>) -> PathBuf {
        let mut input = self.logs_root.clone();
        for component in file_name.as_ref().components() {
            if let Component::Normal(part) = component {
                input.push(part);
            }
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn default_expanded_root_is_under_logs_root() {
        let config = Config::new(DEFAULT_LOGS_ROOT, None).unwrap();
        assert!(config.expanded_root.is_absolute());
        assert!(config.expanded_root.ends_with("data/logs/expanded"));
        assert_eq!(config.logs_root, PathBuf::from("data/logs"));
    }

    #[test]
    fn output_dir_depends_only_on_epoch() {
        let config = Config::new("/srv/logs", None).unwrap();
        assert_eq!(
            config.output_dir(1_700_000_000),
            PathBuf::from("/srv/logs/expanded/1700000000")
        );
        assert_eq!(config.output_dir(1_700_000_000), config.output_dir(1_700_000_000));
        assert_ne!(config.output_dir(1), config.output_dir(2));
        assert_eq!(config.output_dir(-5), PathBuf::from("/srv/logs/expanded/-5"));
    }

    #[test]
    fn input_file_is_relative_to_logs_root() {
        let config = Config::new("/srv/logs", Some("/srv/out".into())).unwrap();
        assert_eq!(config.input_file("a.tar"), PathBuf::from("/srv/logs/a.tar"));
        assert_eq!(config.output_dir(7), PathBuf::from("/srv/out/7"));
    }

    #[test]
    fn input_file_never_leaves_logs_root() {
        let config = Config::new("/srv/logs", None).unwrap();
        assert_eq!(
            config.input_file("/tmp/outside.tar"),
            PathBuf::from("/srv/logs/tmp/outside.tar")
        );
        assert_eq!(
            config.input_file("../../etc/a.tar"),
            PathBuf::from("/srv/logs/etc/a.tar")
        );
        assert_eq!(config.input_file("./sub/a.tar"), PathBuf::from("/srv/logs/sub/a.tar"));
        assert_eq!(config.input_file(""), PathBuf::from("/srv/logs"));
    }

    #[test]
    fn empty_logs_root_rejected() {
        assert!(Config::new("", None).is_err());
    }

    #[test]
    fn cli_flags_carry_through() {
        let cli = Cli::parse_from(["unspool", "--staged", "--best-effort-scan"]);
        let config = Config::from_cli(&cli).unwrap();
        assert!(config.expand.staged);
        assert_eq!(config.scan_mode, ScanMode::BestEffort);
    }
}
