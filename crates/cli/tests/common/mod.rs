// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for harness integration tests.

#![allow(dead_code)]
#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak settings into a test run
const HARNESS_ENV: [&str; 5] = [
    "SHELLCONFORM_CONFIG",
    "SHELLCONFORM_SHELL",
    "SHELLCONFORM_TESTS",
    "SHELLCONFORM_REFERENCE",
    "RUST_LOG",
];

/// A scratch working directory holding a test definition document.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Workspace with `tests.json` holding `json`
    pub fn with_tests(json: &str) -> Self {
        let ws = Self::new();
        ws.write("tests.json", json);
        ws
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// The harness binary, run inside this workspace with a clean environment
    pub fn harness(&self) -> Command {
        let mut cmd = Command::cargo_bin("shellconform").unwrap();
        cmd.current_dir(self.path());
        for var in HARNESS_ENV {
            cmd.env_remove(var);
        }
        cmd
    }
}
