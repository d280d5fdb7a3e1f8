// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![cfg(unix)]

//! Fatal environment errors end the run with status 1 before any case runs.

mod common;

use common::Workspace;
use predicates::prelude::*;

#[test]
fn test_missing_tests_file() {
    let ws = Workspace::new();

    ws.harness()
        .args(["--shell", "/bin/sh"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("Error: could not find tests.json\n");
}

#[test]
fn test_malformed_tests_file() {
    let ws = Workspace::with_tests("{\"echo hi\": ");

    ws.harness()
        .args(["--shell", "/bin/sh"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: failed to parse tests.json"));
}

#[test]
fn test_tests_file_must_be_an_object() {
    let ws = Workspace::with_tests(r#"["echo hi"]"#);

    ws.harness()
        .args(["--shell", "/bin/sh"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must be a JSON object"));
}

#[test]
fn test_non_string_expected_output() {
    let ws = Workspace::with_tests(r#"{"echo hi": 3}"#);

    ws.harness()
        .args(["--shell", "/bin/sh"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"echo hi\""))
        .stdout(predicate::str::contains("Testing").not());
}

#[test]
fn test_build_tool_missing() {
    let ws = Workspace::with_tests(r#"{"echo hi": null}"#);

    ws.harness()
        .args(["--build", "shellconform-no-such-build-tool"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Note: alsh binary not found in current directory",
        ))
        .stderr("Error: could not find \"shellconform-no-such-build-tool\" in PATH\n");
}

#[test]
fn test_build_failure() {
    let ws = Workspace::with_tests(r#"{"echo hi": null}"#);

    ws.harness()
        .args(["--build", "false"])
        .assert()
        .code(1)
        .stderr("Error: failed to compile alsh\n");
}

#[test]
fn test_build_that_produces_nothing() {
    let ws = Workspace::with_tests(r#"{"echo hi": null}"#);

    ws.harness()
        .args(["--build", "true"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("was not produced by the build"));
}

#[test]
fn test_no_build_flag() {
    let ws = Workspace::with_tests(r#"{"echo hi": null}"#);

    ws.harness()
        .args(["--no-build", "--build", "true"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("automatic build is disabled"));
}

#[test]
fn test_missing_reference_interpreter() {
    let ws = Workspace::with_tests(r#"{"echo hi": null}"#);

    ws.harness()
        .args(["--shell", "/bin/sh", "--reference", "shellconform-no-such-sh"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: failed to run shellconform-no-such-sh",
        ));
}

#[test]
fn test_invalid_config_file() {
    let ws = Workspace::with_tests(r#"{"echo hi": null}"#);
    let config = ws.write("bad.toml", "shel = \"/bin/sh\"\n");

    ws.harness()
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: failed to parse config file"));
}

#[test]
fn test_invalid_keyword() {
    let ws = Workspace::with_tests(r#"{"echo hi": null}"#);

    ws.harness()
        .args(["--shell", "/bin/sh", "--keyword", "two words"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    let ws = Workspace::new();

    ws.harness().arg("--frobnicate").assert().code(2);
}
