// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness configuration: built-in defaults, an optional TOML file, and CLI
//! overrides applied in that order.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::style::ColorChoice;

/// Default path of the shell under test
pub const DEFAULT_SHELL: &str = "./alsh";
/// Default test definition document
pub const DEFAULT_TESTS: &str = "tests.json";
/// Default reference interpreter
pub const DEFAULT_REFERENCE: &str = "sh";
/// Default build command
pub const DEFAULT_BUILD: &str = "make";
/// Default declaration keyword of the shell under test
pub const DEFAULT_KEYWORD: &str = "let";
/// Keywords that introduce a bracket conditional test
pub const DEFAULT_CONDITIONAL_KEYWORDS: [&str; 2] = ["if", "while"];

/// Errors loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Validation(String),
}

/// Contents of a harness TOML file. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Path of the shell under test
    #[serde(default)]
    pub shell: Option<PathBuf>,

    /// Test definition document
    #[serde(default)]
    pub tests: Option<PathBuf>,

    /// Reference interpreter, invoked as `<reference> -c <command>`
    #[serde(default)]
    pub reference: Option<String>,

    /// Build command, program first
    #[serde(default)]
    pub build: Option<Vec<String>>,

    /// Compile the shell when its binary is missing
    #[serde(default)]
    pub auto_build: Option<bool>,

    /// Declaration keyword stripped before running the reference interpreter
    #[serde(default)]
    pub keyword: Option<String>,

    /// Keywords whose `[ ... ]` conditional may be skipped
    #[serde(default)]
    pub conditional_keywords: Option<Vec<String>>,

    /// Color mode: "auto", "always", or "never"
    #[serde(default)]
    pub color: Option<ColorChoice>,

    /// JSONL file receiving one record per case
    #[serde(default)]
    pub record: Option<PathBuf>,

    /// Show a unified diff for failed cases
    #[serde(default)]
    pub diff: Option<bool>,
}

impl ConfigFile {
    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Toml {
            path: path.display().to_string(),
            source,
        })
    }

    /// Parse config file contents.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Fully resolved harness configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    pub shell: PathBuf,
    pub tests: PathBuf,
    pub reference: String,
    pub build: Vec<String>,
    pub auto_build: bool,
    pub keyword: String,
    pub conditional_keywords: Vec<String>,
    pub color: ColorChoice,
    pub record: Option<PathBuf>,
    pub diff: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            shell: PathBuf::from(DEFAULT_SHELL),
            tests: PathBuf::from(DEFAULT_TESTS),
            reference: DEFAULT_REFERENCE.to_string(),
            build: vec![DEFAULT_BUILD.to_string()],
            auto_build: true,
            keyword: DEFAULT_KEYWORD.to_string(),
            conditional_keywords: DEFAULT_CONDITIONAL_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            color: ColorChoice::Auto,
            record: None,
            diff: false,
        }
    }
}

impl HarnessConfig {
    /// Overlay the fields set in a config file.
    pub fn apply_file(&mut self, file: ConfigFile) {
        if let Some(shell) = file.shell {
            self.shell = shell;
        }
        if let Some(tests) = file.tests {
            self.tests = tests;
        }
        if let Some(reference) = file.reference {
            self.reference = reference;
        }
        if let Some(build) = file.build {
            self.build = build;
        }
        if let Some(auto_build) = file.auto_build {
            self.auto_build = auto_build;
        }
        if let Some(keyword) = file.keyword {
            self.keyword = keyword;
        }
        if let Some(keywords) = file.conditional_keywords {
            self.conditional_keywords = keywords;
        }
        if let Some(color) = file.color {
            self.color = color;
        }
        if file.record.is_some() {
            self.record = file.record;
        }
        if let Some(diff) = file.diff {
            self.diff = diff;
        }
    }

    /// Check values the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reference.trim().is_empty() {
            return Err(ConfigError::Validation(
                "reference interpreter cannot be empty".to_string(),
            ));
        }
        if !self
            .build
            .first()
            .is_some_and(|program| !program.trim().is_empty())
        {
            return Err(ConfigError::Validation(
                "build command cannot be empty".to_string(),
            ));
        }
        if !is_word(&self.keyword) {
            return Err(ConfigError::Validation(format!(
                "declaration keyword '{}' must be a single non-empty word",
                self.keyword
            )));
        }
        if let Some(bad) = self.conditional_keywords.iter().find(|k| !is_word(k)) {
            return Err(ConfigError::Validation(format!(
                "conditional keyword '{}' must be a single non-empty word",
                bad
            )));
        }
        Ok(())
    }

    /// File name of the shell under test, for messages
    pub fn shell_name(&self) -> String {
        self.shell
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.shell.display().to_string())
    }
}

fn is_word(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(char::is_whitespace)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
