// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging setup.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.
//! The filter is taken from `SBB_LOG`, then `RUST_LOG`, then the project
//! config's `log_level`.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::env;

/// Pick the filter directive: `SBB_LOG` wins over `RUST_LOG`, which wins
/// over the configured level.
pub fn resolve_filter(sbb_log: Option<String>, rust_log: Option<String>, configured: &str) -> String {
    sbb_log
        .or_else(|| rust_log.filter(|v| !v.is_empty()))
        .unwrap_or_else(|| configured.to_string())
}

/// Install the global tracing subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(configured: &str) {
    let directive = resolve_filter(
        env::log_filter(),
        std::env::var(env::vars::RUST_LOG).ok(),
        configured,
    );
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(configured));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal() && !env::no_color())
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
