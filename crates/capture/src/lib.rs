// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output capture and run recording for shell conformance runs.
//!
//! This crate runs subprocesses with stdout and stderr merged into a single
//! stream, and records per-case outcomes of a run as JSONL.

mod log;
mod process;
mod record;

pub use log::RunLog;
pub use process::{capture, capture_with_input, CapturedOutput};
pub use record::{CaseRecord, RecordedOutcome};
