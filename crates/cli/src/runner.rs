// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The run loop: build check, suite loading, per-case execution and the
//! final summary.

use std::io::Write;

use shellconform_capture::{RecordedOutcome, RunLog};

use crate::compile::{build_shell, needs_build, BuildError};
use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::executor::{DualExecutor, Execution};
use crate::interpreter::{Interpreter, ReferenceShell, ShellUnderTest};
use crate::normalize::Normalizer;
use crate::probe::CapabilityProbe;
use crate::report::Reporter;
use crate::suite::{TestCase, TestSuite};
use crate::tally::{compare, Outcome, RunSummary, RunTally};

const SKIP_REASON: &str = "reference interpreter lacks [ ] conditional tests";

/// One run over a suite. Owns the memoized probe for that run.
pub struct Harness<R, S> {
    executor: DualExecutor<R, S>,
    probe: CapabilityProbe,
    log: Option<RunLog>,
}

impl<R: Interpreter, S: Interpreter> Harness<R, S> {
    pub fn new(executor: DualExecutor<R, S>) -> Self {
        Self {
            executor,
            probe: CapabilityProbe::new(),
            log: None,
        }
    }

    /// Use a probe whose answer may already be known
    pub fn with_probe(mut self, probe: CapabilityProbe) -> Self {
        self.probe = probe;
        self
    }

    /// Record every case to `log`
    pub fn with_log(mut self, log: RunLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn executor(&self) -> &DualExecutor<R, S> {
        &self.executor
    }

    pub fn probe(&self) -> &CapabilityProbe {
        &self.probe
    }

    pub fn log(&self) -> Option<&RunLog> {
        self.log.as_ref()
    }

    /// Run every case in order, then print the summary.
    pub fn run<O: Write, E: Write>(
        &self,
        suite: &TestSuite,
        reporter: &mut Reporter<O, E>,
    ) -> Result<RunSummary, HarnessError> {
        let mut tally = RunTally::new();
        for case in suite.iter() {
            self.run_case(&case, &mut tally, reporter)?;
        }

        let summary = tally.summarize(suite.len());
        tracing::debug!(?summary, "run finished");
        reporter.summary(&summary).map_err(HarnessError::Output)?;
        Ok(summary)
    }

    fn run_case<O: Write, E: Write>(
        &self,
        case: &TestCase<'_>,
        tally: &mut RunTally,
        reporter: &mut Reporter<O, E>,
    ) -> Result<(), HarnessError> {
        let execution = self.executor.execute_with(case, &self.probe, || {
            reporter
                .case_header(case.command)
                .map_err(HarnessError::Output)
        })?;
        let (expected, actual) = match execution {
            Execution::Compared { expected, actual } => (expected, actual),
            Execution::Skipped => {
                tracing::info!(command = case.command, "skipping case");
                tally.record_skip();
                return self.record(
                    case,
                    RecordedOutcome::Skipped {
                        reason: SKIP_REASON.to_string(),
                    },
                );
            }
        };

        let outcome = compare(&expected, &actual);
        tally.record(outcome);
        reporter
            .case_result(&expected, &actual, outcome)
            .map_err(HarnessError::Output)?;

        let recorded = match outcome {
            Outcome::Passed => RecordedOutcome::Passed { expected },
            Outcome::Failed => RecordedOutcome::Failed { expected, actual },
        };
        self.record(case, recorded)
    }

    fn record(&self, case: &TestCase<'_>, outcome: RecordedOutcome) -> Result<(), HarnessError> {
        match self.log {
            Some(ref log) => log
                .record(case.command, outcome)
                .map_err(HarnessError::Record),
            None => Ok(()),
        }
    }
}

/// Make sure the shell binary exists, compiling it if allowed.
pub fn ensure_shell<O: Write, E: Write>(
    config: &HarnessConfig,
    reporter: &mut Reporter<O, E>,
) -> Result<(), HarnessError> {
    if !needs_build(&config.shell) {
        return Ok(());
    }
    if !config.auto_build {
        return Err(BuildError::Disabled {
            path: config.shell.display().to_string(),
        }
        .into());
    }

    let shell_name = config.shell_name();
    reporter
        .build_note(&shell_name, &config.build.join(" "))
        .map_err(HarnessError::Output)?;
    build_shell(&config.build, &config.shell, &shell_name)?;
    Ok(())
}

/// Full run for a resolved configuration.
pub fn run_harness<O: Write, E: Write>(
    config: &HarnessConfig,
    reporter: &mut Reporter<O, E>,
) -> Result<RunSummary, HarnessError> {
    ensure_shell(config, reporter)?;

    let suite = TestSuite::load(&config.tests)?;
    if suite.is_empty() {
        tracing::warn!(tests = %config.tests.display(), "test definitions are empty");
    }

    let executor = DualExecutor::new(
        ReferenceShell::new(config.reference.clone()),
        ShellUnderTest::new(config.shell.clone()),
        Normalizer::new(config.keyword.clone()),
        config.conditional_keywords.clone(),
    );
    let mut harness = Harness::new(executor);
    if let Some(ref path) = config.record {
        let log = RunLog::with_file(path).map_err(|source| HarnessError::RecordOpen {
            path: path.display().to_string(),
            source,
        })?;
        harness = harness.with_log(log);
    }

    harness.run(&suite, reporter)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
