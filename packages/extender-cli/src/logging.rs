// ABOUTME: Tracing subscriber setup for the CLI
// ABOUTME: Filter comes from VIZZINI_LOG, then RUST_LOG, defaulting to info

use tracing_subscriber::EnvFilter;
use vizzini_extender::config::VIZZINI_LOG;

pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(VIZZINI_LOG)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init_tracing() {
    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(filter_from_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
