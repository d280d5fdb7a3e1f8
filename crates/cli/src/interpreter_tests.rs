// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![cfg(unix)]

use super::*;

// `sh` started without arguments executes the commands it reads on stdin
const STDIN_SHELL: &str = "/bin/sh";

#[test]
fn test_reference_runs_command_argument() {
    let output = ReferenceShell::new("sh").run("echo hi").unwrap();
    assert_eq!(output.text, "hi\n");
}

#[test]
fn test_reference_merges_stderr() {
    let output = ReferenceShell::new("sh").run("echo oops >&2").unwrap();
    assert_eq!(output.text, "oops\n");
}

#[test]
fn test_reference_empty_command() {
    let output = ReferenceShell::new("sh").run("").unwrap();
    assert_eq!(output.text, "");
    assert!(output.success());
}

#[test]
fn test_reference_missing_program() {
    let err = ReferenceShell::new("/nonexistent/refsh")
        .run("echo hi")
        .unwrap_err();
    assert_eq!(err.program, "/nonexistent/refsh");
    assert!(err.to_string().starts_with("failed to run /nonexistent/refsh"));
}

#[test]
fn test_shell_under_test_reads_command_from_stdin() {
    let shell = ShellUnderTest::new(STDIN_SHELL);
    let output = shell.run("echo hi").unwrap();
    assert_eq!(output.text, "hi\n");
}

#[test]
fn test_shell_under_test_receives_single_quotes_verbatim() {
    let shell = ShellUnderTest::new(STDIN_SHELL);
    let output = shell.run("echo 'a b'").unwrap();
    assert_eq!(output.text, "a b\n");
}

#[test]
fn test_shell_under_test_sees_one_line() {
    let shell = ShellUnderTest::new("/bin/cat");
    let output = shell.run("echo hi").unwrap();
    assert_eq!(output.text, "echo hi\n");
}

#[test]
fn test_shell_under_test_missing_binary() {
    let shell = ShellUnderTest::new("/nonexistent/alsh");
    assert_eq!(shell.name(), "/nonexistent/alsh");
    let err = shell.run("echo hi").unwrap_err();
    assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
}
