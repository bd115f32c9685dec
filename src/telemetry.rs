//! Tracing setup for the command-line host.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary (or to whatever embeds the crate).

use tracing_subscriber::EnvFilter;

/// Install a compact stderr subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Returns `false` if a global subscriber was already set.
pub fn init_default_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
