// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console colors for pass/fail output.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::{self, IsTerminal};

/// ANSI escape sequences used by the reporter
pub mod escape {
    /// Green foreground
    pub const GREEN: &str = "\x1b[32m";

    /// Red foreground
    pub const RED: &str = "\x1b[31m";

    /// Reset all attributes
    pub const RESET: &str = "\x1b[0m";
}

/// When to emit ANSI colors
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color a stream only when it is a terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorChoice {
    /// Resolve the choice for a stream with the given terminal flag.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Resolved coloring for the two output streams.
///
/// Green text goes to stdout and red text to stderr, so each stream is
/// decided separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    stdout: bool,
    stderr: bool,
}

impl Palette {
    /// Build a palette with explicit per-stream flags.
    pub fn new(stdout: bool, stderr: bool) -> Self {
        Self { stdout, stderr }
    }

    /// A palette that never colors.
    pub fn plain() -> Self {
        Self::new(false, false)
    }

    /// Detect terminals on the real stdout/stderr.
    pub fn detect(choice: ColorChoice) -> Self {
        Self::new(
            choice.enabled(io::stdout().is_terminal()),
            choice.enabled(io::stderr().is_terminal()),
        )
    }

    /// Green text for stdout.
    pub fn green(&self, text: &str) -> String {
        paint(self.stdout, escape::GREEN, text)
    }

    /// Red text for stderr.
    pub fn red(&self, text: &str) -> String {
        paint(self.stderr, escape::RED, text)
    }
}

fn paint(enabled: bool, color: &str, text: &str) -> String {
    if enabled {
        format!("{}{}{}", color, text, escape::RESET)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
