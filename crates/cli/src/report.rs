// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-case and summary console output.
//!
//! Informational and passing lines go to `out`, failing lines to `err`.

use std::io::{self, Write};

use similar::TextDiff;

use crate::style::Palette;
use crate::tally::{Outcome, RunSummary, Verdict};

/// Render newlines as the two characters `\n`.
pub fn escape_newlines(text: &str) -> String {
    text.replace('\n', "\\n")
}

/// Unified line diff from expected to actual output.
pub fn unified_diff(expected: &str, actual: &str) -> String {
    TextDiff::from_lines(expected, actual)
        .unified_diff()
        .header("expected", "actual")
        .to_string()
}

pub struct Reporter<O, E> {
    out: O,
    err: E,
    palette: Palette,
    show_diff: bool,
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E, palette: Palette) -> Self {
        Self {
            out,
            err,
            palette,
            show_diff: false,
        }
    }

    /// Print a unified diff after each failure.
    pub fn with_diff(mut self, show_diff: bool) -> Self {
        self.show_diff = show_diff;
        self
    }

    /// Hand back the underlying streams.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Build step notes, printed before any case runs.
    pub fn build_note(&mut self, shell_name: &str, build_command: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "Note: {} binary not found in current directory",
            shell_name
        )?;
        writeln!(self.out, "Trying to compile using \"{}\"...", build_command)?;
        self.out.flush()
    }

    pub fn case_header(&mut self, command: &str) -> io::Result<()> {
        if command.is_empty() {
            writeln!(self.out, "Testing empty command")
        } else {
            writeln!(self.out, "Testing \"{}\"", command)
        }
    }

    /// Expected output, verdict line and, on failure, the actual output.
    pub fn case_result(&mut self, expected: &str, actual: &str, outcome: Outcome) -> io::Result<()> {
        writeln!(self.out, "Expected output: \"{}\"", escape_newlines(expected))?;
        match outcome {
            Outcome::Passed => {
                writeln!(self.out, "{}", self.palette.green("Test case passed"))?;
            }
            Outcome::Failed => {
                // stdout lines must land before the stderr ones
                self.out.flush()?;
                writeln!(self.err, "{}", self.palette.red("Test case failed"))?;
                let line = format!("Actual output: \"{}\"", escape_newlines(actual));
                writeln!(self.err, "{}", self.palette.red(&line))?;
                if self.show_diff {
                    write!(self.err, "{}", unified_diff(expected, actual))?;
                }
                self.err.flush()?;
            }
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        let total = summary.total_evaluated();
        match summary.verdict() {
            Verdict::AllPassed => {
                writeln!(self.out, "{}", self.palette.green("All test cases passed"))?;
                writeln!(self.out, "Total test cases: {}", total)?;
            }
            Verdict::AllFailed => {
                self.out.flush()?;
                writeln!(self.err, "{}", self.palette.red("All test cases failed"))?;
                self.err.flush()?;
                writeln!(self.out, "Total test cases: {}", total)?;
            }
            Verdict::Mixed => {
                self.out.flush()?;
                writeln!(self.err, "{}", self.palette.red("Some test cases failed"))?;
                self.err.flush()?;
                writeln!(self.out, "Total test cases: {}", total)?;
                writeln!(self.out, "Total tests passed: {}", summary.tally.passed)?;
                writeln!(self.out, "Total tests failed: {}", summary.tally.failed)?;
                writeln!(
                    self.out,
                    "Percentage of tests passed: {:.2}%",
                    summary.passed_percent()
                )?;
                writeln!(
                    self.out,
                    "Percentage of tests failed: {:.2}%",
                    summary.failed_percent()
                )?;
            }
        }
        if summary.tally.skipped > 0 {
            writeln!(self.out, "Total tests skipped: {}", summary.tally.skipped)?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
