use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Debug is the baseline; `-q` drops to warnings and `-v` adds per-entry
/// trace output.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::WARN,
        (false, 0) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

/// Install the stderr subscriber. `RUST_LOG` overrides `-v` when set.
pub fn init(verbose: u8, quiet: bool) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose, quiet).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
