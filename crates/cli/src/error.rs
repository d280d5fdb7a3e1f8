// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal harness errors. Anything here ends the run with exit status 1.

use thiserror::Error;

use crate::compile::BuildError;
use crate::config::ConfigError;
use crate::interpreter::InterpreterError;
use crate::suite::SuiteError;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Suite(#[from] SuiteError),

    #[error(transparent)]
    Spawn(#[from] InterpreterError),

    #[error("failed to open run record {path}: {source}")]
    RecordOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write run record: {0}")]
    Record(#[source] std::io::Error),

    #[error("failed to write report: {0}")]
    Output(#[source] std::io::Error),
}
