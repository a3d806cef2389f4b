//! Tracing subscriber setup

use tracing_subscriber::{fmt, EnvFilter};

/// Install a global fmt subscriber filtered by `filter`.
///
/// `RUST_LOG` wins over `filter` when set. Returns `false` if a subscriber was
/// already installed, which is not an error.
pub fn init(filter: &str) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
