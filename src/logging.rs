//! Structured logging setup using `tracing-subscriber`.
//!
//! The pipeline itself has no logging requirement (it is pure), but the
//! boundary does: the missing-tab fallback and settings loading emit
//! tracing events. The CLI installs a console subscriber here; library
//! consumers install their own.

use tracing_subscriber::EnvFilter;

/// Initialise console logging for the CLI.
///
/// Emits human-readable output to stderr. Controlled by `RUST_LOG`,
/// falling back to the level from settings (default: `info`).
pub fn init(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
