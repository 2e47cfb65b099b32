//! Logging initialization.
//!
//! Uses `tracing-subscriber` with the level taken from `RUST_LOG`
//! (default: warn, so diagnostics do not interleave with the prompts).
//! Output goes to stderr.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}
