// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal error output.

use std::io::{self, IsTerminal, Write};

use crate::style::{escape, ColorChoice};

/// Print an error message to stderr.
///
/// Red when `color` allows it for stderr, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display, color: ColorChoice) {
    let colored = color.enabled(io::stderr().is_terminal());
    write_error(&mut io::stderr().lock(), msg, colored);
}

/// Write an error message to a writer with explicit color flag.
fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, colored: bool) {
    if colored {
        let _ = writeln!(writer, "{}Error: {}{}", escape::RED, msg, escape::RESET);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
