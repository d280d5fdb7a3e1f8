// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigError, ConfigFile, HarnessConfig};
use crate::style::ColorChoice;

/// Shell conformance harness
#[derive(Parser, Debug, Clone)]
#[command(
    name = "shellconform",
    version,
    about = "Compare a shell under test against a reference shell"
)]
pub struct Cli {
    /// TOML file with harness settings
    #[arg(long, env = "SHELLCONFORM_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path of the shell under test (default: ./alsh)
    #[arg(long, env = "SHELLCONFORM_SHELL", value_name = "PATH")]
    pub shell: Option<PathBuf>,

    /// Test definition document (default: tests.json)
    #[arg(long, env = "SHELLCONFORM_TESTS", value_name = "PATH")]
    pub tests: Option<PathBuf>,

    /// Reference interpreter, run as `<reference> -c <command>` (default: sh)
    #[arg(long, env = "SHELLCONFORM_REFERENCE", value_name = "PROGRAM")]
    pub reference: Option<String>,

    /// Command used to compile the shell when its binary is missing (default: make).
    ///
    /// Split on whitespace; use the config file's `build` array for arguments
    /// containing spaces.
    #[arg(long, value_name = "COMMAND")]
    pub build: Option<String>,

    /// Fail instead of compiling when the shell binary is missing
    #[arg(long)]
    pub no_build: bool,

    /// Declaration keyword of the shell under test (default: let)
    #[arg(long, value_name = "WORD")]
    pub keyword: Option<String>,

    /// When to color output
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Write one JSON line per case to this file
    #[arg(long, value_name = "PATH")]
    pub record: Option<PathBuf>,

    /// Print a unified diff of expected and actual output for failed cases
    #[arg(long)]
    pub diff: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolve defaults, the optional config file, and these flags into one config.
    pub fn resolve_config(&self) -> Result<HarnessConfig, ConfigError> {
        let mut config = HarnessConfig::default();

        if let Some(ref path) = self.config {
            config.apply_file(ConfigFile::load(path)?);
        }

        if let Some(ref shell) = self.shell {
            config.shell = shell.clone();
        }
        if let Some(ref tests) = self.tests {
            config.tests = tests.clone();
        }
        if let Some(ref reference) = self.reference {
            config.reference = reference.clone();
        }
        if let Some(ref build) = self.build {
            config.build = build.split_whitespace().map(str::to_string).collect();
        }
        if self.no_build {
            config.auto_build = false;
        }
        if let Some(ref keyword) = self.keyword {
            config.keyword = keyword.clone();
        }
        if let Some(color) = self.color {
            config.color = color;
        }
        if self.record.is_some() {
            config.record = self.record.clone();
        }
        if self.diff {
            config.diff = true;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
