// src/logging.rs
// Installs the tracing subscriber for the command-line tool.

use tracing_subscriber::EnvFilter;

/// Logs go to stderr so that --json output on stdout stays parseable.
///
/// RUST_LOG wins when set; otherwise `verbose` picks debug over warn.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
