//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs a stderr `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, since
/// regular progress is printed by the output formatter.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be set when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
