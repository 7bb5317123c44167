use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging on stderr, filtered by `RUST_LOG` (default "info").
///
/// Stdout is reserved for the statistics report.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
