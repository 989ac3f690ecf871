//! Diagnostic logging setup
//!
//! Demo output goes to stdout; diagnostics go to stderr through `tracing`.
//! `RUST_LOG` takes precedence over the `-v` count.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Map the `-v` count to a default level.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. Safe to call once per process; later calls
/// are ignored.
pub fn init(verbose: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for_verbosity(verbose).into())
        .from_env_lossy();

    let fmt = fmt::layer()
        .without_time()
        .with_target(verbose >= 2)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    let _ = tracing_subscriber::registry().with(fmt).try_init();
}
