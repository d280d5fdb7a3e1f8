// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recorded case data types.

use serde::{Deserialize, Serialize};

/// One test case as recorded in a run log
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Sequence number, in execution order
    pub seq: u64,

    /// Milliseconds since the log was created
    pub elapsed_ms: u64,

    /// Original command text as sent to the shell under test
    pub command: String,

    /// What happened to the case
    pub outcome: RecordedOutcome,
}

/// Recorded outcome of a case
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecordedOutcome {
    Passed {
        expected: String,
    },
    Failed {
        expected: String,
        actual: String,
    },
    Skipped {
        reason: String,
    },
}

impl RecordedOutcome {
    /// Short lowercase label, matching the serialized tag
    pub fn label(&self) -> &'static str {
        match self {
            RecordedOutcome::Passed { .. } => "passed",
            RecordedOutcome::Failed { .. } => "failed",
            RecordedOutcome::Skipped { .. } => "skipped",
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
