// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The two interpreters a case runs through.

use std::path::PathBuf;
use std::process::Command;

use shellconform_capture::{capture, capture_with_input, CapturedOutput};
use thiserror::Error;

/// Failure to launch an interpreter process
#[derive(Debug, Error)]
#[error("failed to run {program}: {source}")]
pub struct InterpreterError {
    pub program: String,
    #[source]
    pub source: std::io::Error,
}

/// Something that runs one command and reports its merged output.
pub trait Interpreter {
    /// Run `command` to completion.
    fn run(&self, command: &str) -> Result<CapturedOutput, InterpreterError>;

    /// Name used in logs
    fn name(&self) -> &str;
}

/// Trusted baseline shell, given the command as a `-c` argument
#[derive(Clone, Debug)]
pub struct ReferenceShell {
    program: String,
}

impl ReferenceShell {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Interpreter for ReferenceShell {
    fn run(&self, command: &str) -> Result<CapturedOutput, InterpreterError> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-c").arg(command);
        tracing::debug!(program = %self.program, %command, "running reference interpreter");
        capture(cmd).map_err(|source| InterpreterError {
            program: self.program.clone(),
            source,
        })
    }

    fn name(&self) -> &str {
        &self.program
    }
}

/// The shell being validated, fed the command as one line on stdin
#[derive(Clone, Debug)]
pub struct ShellUnderTest {
    path: PathBuf,
    name: String,
}

impl ShellUnderTest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl Interpreter for ShellUnderTest {
    fn run(&self, command: &str) -> Result<CapturedOutput, InterpreterError> {
        let mut line = String::with_capacity(command.len() + 1);
        line.push_str(command);
        line.push('\n');

        tracing::debug!(shell = %self.name, %command, "running shell under test");
        capture_with_input(Command::new(&self.path), Some(line.as_bytes())).map_err(|source| {
            InterpreterError {
                program: self.name.clone(),
                source,
            }
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
#[path = "interpreter_tests.rs"]
mod tests;
