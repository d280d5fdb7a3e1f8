// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Detection of bracket conditional-test support in the reference interpreter.
//!
//! The answer is computed lazily, at most once per run, the first time a case
//! needs it.

use std::cell::OnceCell;

use crate::interpreter::{Interpreter, InterpreterError};

/// Trivially true conditional test used to probe the reference interpreter
pub const PROBE_COMMAND: &str = "[ 1 -eq 1 ]";

/// Whether the reference interpreter supports `[ ... ]`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeResult {
    Supported,
    Unsupported,
}

impl ProbeResult {
    pub fn is_unsupported(self) -> bool {
        self == ProbeResult::Unsupported
    }
}

/// Memoized probe owned by one run. An empty cell means "not probed yet".
#[derive(Debug, Default)]
pub struct CapabilityProbe {
    result: OnceCell<ProbeResult>,
}

impl CapabilityProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// A probe whose answer is already known
    pub fn with_result(result: ProbeResult) -> Self {
        let probe = Self::new();
        let _ = probe.result.set(result);
        probe
    }

    /// The cached answer, `None` while unknown
    pub fn cached(&self) -> Option<ProbeResult> {
        self.result.get().copied()
    }

    /// Return the cached answer, probing `reference` the first time.
    pub fn resolve(&self, reference: &dyn Interpreter) -> Result<ProbeResult, InterpreterError> {
        if let Some(result) = self.cached() {
            return Ok(result);
        }

        let output = reference.run(PROBE_COMMAND)?;
        let result = if output.success() {
            ProbeResult::Supported
        } else {
            ProbeResult::Unsupported
        };
        tracing::info!(
            reference = reference.name(),
            code = ?output.code,
            ?result,
            "probed conditional-test support"
        );

        let _ = self.result.set(result);
        Ok(result)
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
