//! Expand archived build logs referenced by manifest descriptors.
//!
//! Each `manifest_*.json` under the logs root names an archive; the archive
//! is expanded into `<expanded_root>/<TimeEpoch>/` unless that directory
//! already exists.

pub mod age;
pub mod cli;
pub mod config;
pub mod logging;
pub mod orchestrator;

pub use config::Config;
pub use orchestrator::{ExpansionRequest, Outcome, RunSummary, plan, process, run};
