// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiling the shell under test when its binary is missing.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Fatal build step failures
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("{path} not found and automatic build is disabled")]
    Disabled { path: String },

    #[error("could not find \"{program}\" in PATH")]
    ToolMissing { program: String },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to compile {shell}")]
    Failed { shell: String, code: Option<i32> },

    #[error("{path} was not produced by the build")]
    NotProduced { path: String },
}

/// Whether the shell binary is absent and must be built.
pub fn needs_build(shell: &Path) -> bool {
    !shell.is_file()
}

/// Run `build` (program first) with inherited stdio, then confirm `shell`
/// exists.
pub fn build_shell(build: &[String], shell: &Path, shell_name: &str) -> Result<(), BuildError> {
    let Some((program, args)) = build.split_first() else {
        return Err(BuildError::ToolMissing {
            program: String::new(),
        });
    };

    let resolved = which::which(program).map_err(|_| BuildError::ToolMissing {
        program: program.clone(),
    })?;
    tracing::info!(program = %resolved.display(), ?args, "building shell under test");

    let status = Command::new(&resolved)
        .args(args)
        .status()
        .map_err(|source| BuildError::Spawn {
            program: program.clone(),
            source,
        })?;
    if !status.success() {
        tracing::debug!(code = ?status.code(), "build exited unsuccessfully");
        return Err(BuildError::Failed {
            shell: shell_name.to_string(),
            code: status.code(),
        });
    }

    if needs_build(shell) {
        return Err(BuildError::NotProduced {
            path: shell.display().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
