// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Scripted interpreters for engine tests.

use std::cell::RefCell;
use std::collections::HashMap;

use shellconform_capture::CapturedOutput;

use crate::interpreter::{Interpreter, InterpreterError};

/// Interpreter answering from a table and recording every command it sees.
///
/// Unknown commands produce empty output with exit code 0.
#[derive(Debug, Default)]
pub struct ScriptedInterpreter {
    name: String,
    responses: HashMap<String, CapturedOutput>,
    missing: bool,
    calls: RefCell<Vec<String>>,
}

impl ScriptedInterpreter {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// An interpreter whose program cannot be launched
    pub fn missing(name: &str) -> Self {
        Self {
            missing: true,
            ..Self::new(name)
        }
    }

    /// Answer `command` with `text` and exit `code`
    pub fn respond(mut self, command: &str, text: &str, code: i32) -> Self {
        self.responses.insert(
            command.to_string(),
            CapturedOutput {
                text: text.to_string(),
                code: Some(code),
            },
        );
        self
    }

    /// Commands run so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// How many times `command` was run
    pub fn count(&self, command: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == command).count()
    }
}

impl Interpreter for ScriptedInterpreter {
    fn run(&self, command: &str) -> Result<CapturedOutput, InterpreterError> {
        self.calls.borrow_mut().push(command.to_string());
        if self.missing {
            return Err(InterpreterError {
                program: self.name.clone(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        Ok(self
            .responses
            .get(command)
            .cloned()
            .unwrap_or(CapturedOutput {
                text: String::new(),
                code: Some(0),
            }))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
