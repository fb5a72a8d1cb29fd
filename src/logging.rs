use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber.
///
/// Level comes from `RUST_LOG` (default `info`). Output goes to stderr so
/// result tables on stdout stay readable.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
