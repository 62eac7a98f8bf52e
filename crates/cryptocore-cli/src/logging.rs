//! Tracing setup for the command-line front end.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset. Stdout carries command output, so
/// the default stays quiet.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing with a compact formatter writing to stderr.
///
/// `RUST_LOG` overrides `default_filter` when set and valid.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
