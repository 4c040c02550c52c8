//! Tracing/logging initialization.
//!
//! Logs go to stderr so `--json` output on stdout stays parseable.
//! Filtering is configurable via `RUST_LOG` and defaults to `info`.

use tracing_subscriber::EnvFilter;

/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
