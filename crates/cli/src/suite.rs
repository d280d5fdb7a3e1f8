// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test definition loading.
//!
//! A test definition document is a JSON object mapping each command to the
//! output expected from the shell under test, or to `null` when the expected
//! output should come from the reference interpreter. Object order is run
//! order.

use serde_json::{Map, Value};
use std::path::Path;
use thiserror::Error;

/// Errors loading a test definition document
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("could not find {0}")]
    NotFound(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("test definitions must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("expected output for {command:?} must be a string or null, found {found}")]
    InvalidExpected {
        command: String,
        found: &'static str,
    },
}

/// One test case, borrowed from its suite
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestCase<'a> {
    /// Command text, exactly as sent to the shell under test
    pub command: &'a str,

    /// Literal expected output; `None` means ask the reference interpreter
    pub expected_override: Option<&'a str>,
}

impl TestCase<'_> {
    /// Whether this is the empty command
    pub fn is_empty_command(&self) -> bool {
        self.command.is_empty()
    }
}

/// Ordered, keyed collection of test cases
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestSuite {
    cases: Vec<(String, Option<String>)>,
}

impl TestSuite {
    /// Create an empty suite
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a suite from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SuiteError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SuiteError::NotFound(path.display().to_string()));
            }
            Err(source) => {
                return Err(SuiteError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        let value: Value = serde_json::from_str(&content).map_err(|source| SuiteError::Json {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_value(value)
    }

    /// Build a suite from a parsed JSON document.
    pub fn from_value(value: Value) -> Result<Self, SuiteError> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(SuiteError::NotAnObject(json_kind(&other))),
        }
    }

    fn from_map(map: Map<String, Value>) -> Result<Self, SuiteError> {
        let mut suite = Self::new();
        for (command, expected) in map {
            let expected = match expected {
                Value::Null => None,
                Value::String(s) => Some(s),
                other => {
                    return Err(SuiteError::InvalidExpected {
                        command,
                        found: json_kind(&other),
                    })
                }
            };
            suite.insert(command, expected);
        }
        Ok(suite)
    }

    /// Insert a case. An existing command keeps its position and takes the new value.
    pub fn insert(&mut self, command: impl Into<String>, expected: Option<String>) {
        let command = command.into();
        match self.cases.iter_mut().find(|(c, _)| *c == command) {
            Some(entry) => entry.1 = expected,
            None => self.cases.push((command, expected)),
        }
    }

    /// Cases in run order
    pub fn iter(&self) -> impl Iterator<Item = TestCase<'_>> {
        self.cases.iter().map(|(command, expected)| TestCase {
            command,
            expected_override: expected.as_deref(),
        })
    }

    /// Number of cases
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the suite has no cases
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
