//! Tracing subscriber setup for the `crystal` binary
//!
//! The library only emits events; installing a subscriber is the caller's
//! choice. `RUST_LOG` overrides the default filter.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "crystal_budget=warn";

/// Install the global fmt subscriber, writing to stderr
///
/// `verbose` lowers the default level to `debug`. Safe to call more than
/// once; only the first call has an effect.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let default = if verbose {
            "crystal_budget=debug"
        } else {
            DEFAULT_DIRECTIVE
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
