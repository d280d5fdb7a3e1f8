// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! `RUST_LOG` wins when set; otherwise the level follows `-v` repetitions.

use std::io::IsTerminal;

use tracing_subscriber::{fmt, util::SubscriberInitExt, EnvFilter};

/// Base level for a `-v` count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Effective filter, honoring `RUST_LOG` if set and valid.
pub fn env_filter(verbosity: u8) -> EnvFilter {
    if std::env::var_os("RUST_LOG").is_some() {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
    }
    EnvFilter::new(level_for_verbosity(verbosity))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(verbosity: u8) {
    let subscriber = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(verbosity))
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .compact()
        .finish();
    if let Err(err) = subscriber.try_init() {
        tracing::debug!(%err, "logging already initialized");
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
