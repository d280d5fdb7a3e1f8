// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comparison of expected and actual output, and the run tally.

/// Outcome of one compared case
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
}

impl Outcome {
    pub fn is_passed(self) -> bool {
        self == Outcome::Passed
    }
}

/// Exact byte-for-byte comparison.
pub fn compare(expected: &str, actual: &str) -> Outcome {
    if expected == actual {
        Outcome::Passed
    } else {
        Outcome::Failed
    }
}

/// Counters owned by the run loop. Every processed case bumps exactly one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunTally {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RunTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed => self.failed += 1,
        }
    }

    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Number of cases processed so far
    pub fn processed(&self) -> usize {
        self.passed + self.failed + self.skipped
    }

    /// Freeze the tally against the suite size.
    pub fn summarize(self, total_cases: usize) -> RunSummary {
        RunSummary {
            tally: self,
            total_cases,
        }
    }
}

/// Which summary block the reporter prints
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    AllPassed,
    AllFailed,
    Mixed,
}

/// Final tally plus the number of cases in the suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub tally: RunTally,
    pub total_cases: usize,
}

impl RunSummary {
    /// Cases that were not skipped; the percentage denominator.
    pub fn total_evaluated(&self) -> usize {
        self.total_cases.saturating_sub(self.tally.skipped)
    }

    pub fn verdict(&self) -> Verdict {
        if self.tally.passed == self.total_evaluated() {
            Verdict::AllPassed
        } else if self.tally.passed == 0 {
            Verdict::AllFailed
        } else {
            Verdict::Mixed
        }
    }

    pub fn passed_percent(&self) -> f64 {
        percent(self.tally.passed, self.total_evaluated())
    }

    pub fn failed_percent(&self) -> f64 {
        percent(self.tally.failed, self.total_evaluated())
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

#[cfg(test)]
#[path = "tally_tests.rs"]
mod tests;
