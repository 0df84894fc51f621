//! Logging setup.
//!
//! Logs go to stderr, which shares the terminal with the session, so the
//! default level only lets real errors through. `RUST_LOG` overrides the
//! configured level.

use std::io;
use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor `LOG_LEVEL` is set.
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Filter from `RUST_LOG`, falling back to `level`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global stderr subscriber.
pub fn init(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(io::stderr)
        .init();
}
