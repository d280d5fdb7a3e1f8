// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell conformance harness
//!
//! Runs each command of a test definition document through a trusted
//! reference shell and through the shell under test, compares the merged
//! output byte for byte, and reports per-case results with a final summary.
//! Commands whose `[ ... ]` conditional the reference shell cannot run are
//! skipped rather than failed.

// Internal modules - pub for binary access, hidden from docs
#[doc(hidden)]
pub mod cli;
#[doc(hidden)]
pub mod compile;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod diagnostic;
#[doc(hidden)]
pub mod error;
pub mod executor;
pub mod interpreter;
#[doc(hidden)]
pub mod logging;
pub mod normalize;
pub mod probe;
pub mod report;
pub mod runner;
#[doc(hidden)]
pub mod style;
pub mod suite;
pub mod tally;

/// Re-exported recording types from shellconform-capture crate.
pub mod record {
    pub use shellconform_capture::{CaseRecord, RecordedOutcome, RunLog};
}

#[cfg(test)]
mod test_helpers;
