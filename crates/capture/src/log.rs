// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run log implementation.

use crate::record::{CaseRecord, RecordedOutcome};
use parking_lot::Mutex;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

/// Log of case outcomes for one run, optionally mirrored to a JSONL file
pub struct RunLog {
    start: Instant,
    records: Mutex<Vec<CaseRecord>>,
    file_writer: Option<Mutex<BufWriter<File>>>,
}

impl RunLog {
    /// Create a new in-memory run log
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            records: Mutex::new(Vec::new()),
            file_writer: None,
        }
    }

    /// Create a run log that also writes each record to `path` (JSONL format)
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            file_writer: Some(Mutex::new(BufWriter::new(file))),
            ..Self::new()
        })
    }

    /// Record the outcome of a case.
    ///
    /// The record is kept in memory even when writing it to the file fails.
    pub fn record(
        &self,
        command: impl Into<String>,
        outcome: RecordedOutcome,
    ) -> std::io::Result<()> {
        let mut records = self.records.lock();
        let record = CaseRecord {
            seq: records.len() as u64,
            elapsed_ms: self.start.elapsed().as_millis() as u64,
            command: command.into(),
            outcome,
        };
        records.push(record.clone());
        drop(records);

        if let Some(ref writer) = self.file_writer {
            let mut w = writer.lock();
            let json = serde_json::to_string(&record)?;
            writeln!(w, "{}", json)?;
            w.flush()?;
        }
        Ok(())
    }

    /// Get all records
    pub fn records(&self) -> Vec<CaseRecord> {
        self.records.lock().clone()
    }

    /// Count records matching a predicate
    pub fn count<F: Fn(&CaseRecord) -> bool>(&self, pred: F) -> usize {
        self.records.lock().iter().filter(|r| pred(r)).count()
    }

    /// Get the total number of records
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl Default for RunLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
