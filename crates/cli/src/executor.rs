// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dual execution of a case through the reference interpreter and the shell
//! under test.

use crate::interpreter::{Interpreter, InterpreterError};
use crate::normalize::Normalizer;
use crate::probe::CapabilityProbe;
use crate::suite::TestCase;

/// Result of executing one case
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Execution {
    /// The reference interpreter cannot run the case's conditional test
    Skipped,
    /// Both outputs were resolved
    Compared { expected: String, actual: String },
}

/// Runs cases through a reference interpreter and a shell under test.
pub struct DualExecutor<R, S> {
    reference: R,
    shell: S,
    normalizer: Normalizer,
    conditional_keywords: Vec<String>,
}

impl<R: Interpreter, S: Interpreter> DualExecutor<R, S> {
    pub fn new(
        reference: R,
        shell: S,
        normalizer: Normalizer,
        conditional_keywords: Vec<String>,
    ) -> Self {
        Self {
            reference,
            shell,
            normalizer,
            conditional_keywords,
        }
    }

    pub fn reference(&self) -> &R {
        &self.reference
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    /// Skip check, then expected and actual output.
    pub fn execute(
        &self,
        case: &TestCase<'_>,
        probe: &CapabilityProbe,
    ) -> Result<Execution, InterpreterError> {
        self.execute_with(case, probe, || Ok(()))
    }

    /// Like [`execute`](Self::execute), calling `on_run` once the case is
    /// known not to be skipped and before either interpreter runs it.
    pub fn execute_with<E, F>(
        &self,
        case: &TestCase<'_>,
        probe: &CapabilityProbe,
        on_run: F,
    ) -> Result<Execution, E>
    where
        E: From<InterpreterError>,
        F: FnOnce() -> Result<(), E>,
    {
        if self.should_skip(case, probe)? {
            return Ok(Execution::Skipped);
        }
        on_run()?;
        let (expected, actual) = self.outputs(case)?;
        Ok(Execution::Compared { expected, actual })
    }

    /// Whether the case needs `[ ... ]` that the reference interpreter lacks.
    ///
    /// The probe is only consulted for cases that use a conditional test.
    pub fn should_skip(
        &self,
        case: &TestCase<'_>,
        probe: &CapabilityProbe,
    ) -> Result<bool, InterpreterError> {
        if !requires_conditional_test(case.command, self.conditional_keywords.as_slice()) {
            return Ok(false);
        }
        Ok(probe.resolve(&self.reference)?.is_unsupported())
    }

    /// Expected output (override or reference run) and actual output.
    pub fn outputs(&self, case: &TestCase<'_>) -> Result<(String, String), InterpreterError> {
        let expected = match case.expected_override {
            Some(literal) => literal.to_string(),
            None => {
                let normalized = self.normalizer.normalize(case.command);
                self.reference.run(&normalized)?.text
            }
        };
        let actual = self.shell.run(case.command)?.text;
        Ok((expected, actual))
    }
}

/// Whether `command` opens with a conditional keyword followed by `[`.
///
/// Only spaces may separate the keyword and the bracket.
pub fn requires_conditional_test<K: AsRef<str>>(command: &str, keywords: &[K]) -> bool {
    keywords.iter().any(|keyword| {
        command
            .strip_prefix(keyword.as_ref())
            .is_some_and(|rest| rest.trim_start_matches(' ').starts_with('['))
    })
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
