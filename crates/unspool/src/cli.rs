use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Clone, Debug, Parser)]
#[command(name = "unspool", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Directory scanned for manifest_*.json files and their archives.
    #[arg(long, value_name = "DIR", default_value = "data/logs")]
    pub logs_root: PathBuf,

    /// Where per-epoch output directories are created [default: <LOGS_ROOT>/expanded]
    #[arg(long, value_name = "DIR")]
    pub expanded_root: Option<PathBuf>,

    /// Extract into a hidden sibling directory and move it into place on success.
    #[arg(long)]
    pub staged: bool,

    /// Keep scanning past unreadable directories instead of aborting.
    #[arg(long)]
    pub best_effort_scan: bool,

    /// Add per-entry trace output to the default debug log.
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,
}
