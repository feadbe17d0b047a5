use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Diagnostics go to standard error so they
/// never interleave with protocol output.
///
/// An unparsable `filter` falls back to [`DEFAULT_LOG_FILTER`](crate::config::DEFAULT_LOG_FILTER).
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));
    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
