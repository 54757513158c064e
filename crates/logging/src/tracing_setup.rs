//! crates/logging/src/tracing_setup.rs
//! Installs the structured tracing subscriber used for debug traces.
//!
//! User-facing output never goes through tracing; it is rendered by
//! [`MessageSink`](crate::MessageSink). Traces are for diagnosing the tool
//! itself and are off unless `-vv` is given or [`LOG_ENV_VAR`] is set.
//!
//! # Priority (highest to lowest)
//!
//! 1. `ASCII_RENAME_LOG` env var (per-target directives, e.g. `ascii_rename::walk=trace`)
//! 2. verbosity-derived default from [`VerbosityConfig::default_directive`]

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::verbosity::VerbosityConfig;

/// Environment variable consulted for tracing directives.
pub const LOG_ENV_VAR: &str = "ASCII_RENAME_LOG";

/// Installs the global subscriber writing compact traces to stderr.
///
/// Returns `false` when a subscriber was already installed, which happens when
/// the CLI entry point runs several times inside one test process.
pub fn init_tracing(config: &VerbosityConfig) -> bool {
    let filter = build_env_filter(config);
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
}

fn build_env_filter(config: &VerbosityConfig) -> EnvFilter {
    if let Ok(directives) = std::env::var(LOG_ENV_VAR)
        && let Ok(filter) = EnvFilter::try_new(&directives)
    {
        return filter;
    }

    EnvFilter::try_new(config.default_directive()).unwrap_or_else(|_| EnvFilter::new("off"))
}
