//! Diagnostic logging
//!
//! Diagnostics go to stderr through `tracing`; command results stay on stdout.
//! `RUST_LOG` overrides the level chosen from the command line.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "topictag=warn";
const VERBOSE_LOG_FILTER: &str = "topictag=debug";

/// Filter directive for the requested verbosity
#[must_use]
pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER }
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
