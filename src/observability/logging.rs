//! Structured logging setup.
//!
//! Installs a `tracing-subscriber` formatter filtered by `RUST_LOG`, falling
//! back to `DEFAULT_FILTER` when the variable is unset or invalid.

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is absent
pub const DEFAULT_FILTER: &str = "info,employee_api=debug,tower_http=debug";

/// Builds the log filter from the environment
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .try_init();
}
