//! Utility module
//!
//! Logging setup for binaries and demos that embed the configuration store.

use tracing::Level;

/// Installs a `fmt` subscriber printing events at `level` and above
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}
