//! Logging infrastructure for Decklens.
//!
//! Diagnostics go to stderr: stdout carries report output whose exact
//! bytes matter, so it must never be interleaved with log lines.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging with sensible defaults
///
/// The default level is WARN, so a normal run prints nothing beyond the
/// report itself. Set RUST_LOG to raise verbosity (e.g. `RUST_LOG=debug`).
pub fn init() {
    init_with_level("warn")
}

/// Initialize logging with a specific default level
///
/// RUST_LOG still takes precedence when set.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
