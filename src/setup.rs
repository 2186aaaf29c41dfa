//! Runtime setup for the CLI.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Default log filter for a verbosity level.
///
/// Infraction and parse-failure events are `error`/`warn`, so they are
/// always shown; `-v` adds progress, `-vv` analyzer details.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Initialize the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` overrides the verbosity-derived filter.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    // A subscriber may already be installed (repeat calls in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .try_init();
}
