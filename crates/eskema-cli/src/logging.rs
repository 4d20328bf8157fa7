use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::GlobalOpts;

/// Maps `-q` / `-v` flags to a default log level.
pub fn level_for(global: &GlobalOpts) -> LevelFilter {
    if global.quiet {
        return LevelFilter::ERROR;
    }
    match global.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the level the
/// flags select.
pub fn init(global: &GlobalOpts) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(global).into())
        .from_env_lossy();

    // A subscriber may already be installed when running inside a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!global.no_color)
        .try_init();
}
