//! Drives one pass over a logs root: scan, decode, then expand every
//! manifest whose output directory does not exist yet.

use std::io;
use std::path::PathBuf;

use tracing::{debug, info};
use unspool_archive::{ArchiveKind, ExpandReport, expand};
use unspool_manifest::{ManifestRecord, decode_all, scan_manifests};

use crate::age::age_from_now;
use crate::config::Config;

/// Where one manifest's archive comes from and where it goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpansionRequest {
    pub kind: ArchiveKind,
    pub input: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Debug)]
pub enum Outcome {
    Expanded(ExpandReport),
    AlreadyExpanded,
    Unsupported,
    Failed(unspool_archive::Error),
    /// The output directory could not be checked at all.
    Inaccessible(io::Error),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub manifests: usize,
    pub scan_warnings: usize,
    pub undecodable: usize,
    pub expanded: usize,
    pub already_expanded: usize,
    pub unsupported: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Expanded(_) => self.expanded += 1,
            Outcome::AlreadyExpanded => self.already_expanded += 1,
            Outcome::Unsupported => self.unsupported += 1,
            Outcome::Failed(_) | Outcome::Inaccessible(_) => self.failed += 1,
        }
    }
}

/// Pure mapping from a record to its input archive and output directory.
pub fn plan(record: &ManifestRecord, config: &Config) -> ExpansionRequest {
    let input = config.input_file(&record.file_name);
    ExpansionRequest {
        kind: ArchiveKind::from_path(&input),
        input,
        output_dir: config.output_dir(record.time_epoch),
    }
}

/// Expand one request unless its output directory already exists.
///
/// Every outcome is logged here and returned; nothing is escalated.
pub fn process(request: &ExpansionRequest, config: &Config, age: &str) -> Outcome {
    let ExpansionRequest {
        kind,
        input,
        output_dir,
    } = request;

    debug!(age, output = %output_dir.display(), "checking existence of directory");
    match output_dir.try_exists() {
        Ok(false) => {}
        Ok(true) => return Outcome::AlreadyExpanded,
        Err(err) => {
            debug!(output = %output_dir.display(), error = %err, "cannot stat output directory");
            return Outcome::Inaccessible(err);
        }
    }
    debug!(input = %input.display(), "age {age} ago");

    if !kind.is_supported() {
        debug!(input = %input.display(), "unsupported file format");
        return Outcome::Unsupported;
    }

    match expand(*kind, input, output_dir, &config.expand) {
        Ok(report) => {
            debug!(
                input = %input.display(),
                output = %output_dir.display(),
                files = report.stats.files,
                bytes = report.stats.total_bytes,
                "{kind} file expanded successfully"
            );
            Outcome::Expanded(report)
        }
        Err(err) => {
            debug!(input = %input.display(), error = %err, "error expanding {kind} file");
            Outcome::Failed(err)
        }
    }
}

/// One full pass. Only a failed manifest scan is returned as an error.
pub fn run(config: &Config) -> Result<RunSummary, unspool_manifest::Error> {
    let scan = scan_manifests(&config.logs_root, config.scan_mode)?;
    let records = decode_all(&scan.matches);

    let mut summary = RunSummary {
        manifests: scan.matches.len(),
        scan_warnings: scan.warnings.len(),
        undecodable: scan.matches.len() - records.len(),
        ..Default::default()
    };

    for (_, record) in &records {
        let request = plan(record, config);
        let outcome = process(&request, config, &age_from_now(record.time_epoch));
        summary.record(&outcome);
    }

    info!(
        manifests = summary.manifests,
        expanded = summary.expanded,
        already_expanded = summary.already_expanded,
        unsupported = summary.unsupported,
        failed = summary.failed,
        undecodable = summary.undecodable,
        "run complete"
    );
    Ok(summary)
}
