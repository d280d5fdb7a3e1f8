// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use serde_json::json;
use std::io::Write;
use yare::parameterized;

fn commands(suite: &TestSuite) -> Vec<&str> {
    suite.iter().map(|case| case.command).collect()
}

#[test]
fn test_preserves_document_order() {
    let value: Value =
        serde_json::from_str(r#"{"pwd": null, "echo b": null, "echo a": "a\n", "": null}"#)
            .unwrap();
    let suite = TestSuite::from_value(value).unwrap();
    assert_eq!(commands(&suite), vec!["pwd", "echo b", "echo a", ""]);
}

#[test]
fn test_null_and_string_values() {
    let suite = TestSuite::from_value(json!({"echo hi": null, "echo x": "wrong\n"})).unwrap();
    let cases: Vec<TestCase> = suite.iter().collect();
    assert_eq!(cases[0].expected_override, None);
    assert_eq!(cases[1].expected_override, Some("wrong\n"));
}

#[test]
fn test_empty_command_is_a_case() {
    let suite = TestSuite::from_value(json!({"": null})).unwrap();
    let case = suite.iter().next().unwrap();
    assert!(case.is_empty_command());
    assert_eq!(suite.len(), 1);
}

#[test]
fn test_duplicate_key_keeps_first_position_and_last_value() {
    let value: Value =
        serde_json::from_str(r#"{"echo a": "1", "echo b": null, "echo a": "2"}"#).unwrap();
    let suite = TestSuite::from_value(value).unwrap();
    let cases: Vec<TestCase> = suite.iter().collect();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].command, "echo a");
    assert_eq!(cases[0].expected_override, Some("2"));
}

#[test]
fn test_insert_replaces_in_place() {
    let mut suite = TestSuite::new();
    suite.insert("a", None);
    suite.insert("b", None);
    suite.insert("a", Some("x".to_string()));
    assert_eq!(commands(&suite), vec!["a", "b"]);
    assert_eq!(suite.iter().next().unwrap().expected_override, Some("x"));
}

#[parameterized(
    number = { json!({"echo 1": 1}), "a number" },
    boolean = { json!({"true": true}), "a boolean" },
    array = { json!({"echo": ["a"]}), "an array" },
    object = { json!({"echo": {"a": 1}}), "an object" },
)]
fn invalid_expected_values(value: Value, kind: &str) {
    let err = TestSuite::from_value(value).unwrap_err();
    match err {
        SuiteError::InvalidExpected { found, .. } => assert_eq!(found, kind),
        other => panic!("unexpected error: {other}"),
    }
}

#[parameterized(
    array = { json!(["echo hi"]), "an array" },
    string = { json!("echo hi"), "a string" },
    null = { json!(null), "null" },
)]
fn top_level_must_be_object(value: Value, kind: &str) {
    let err = TestSuite::from_value(value).unwrap_err();
    assert!(matches!(err, SuiteError::NotAnObject(k) if k == kind));
}

#[test]
fn test_load_missing_file() {
    let err = TestSuite::load(Path::new("/nonexistent/tests.json")).unwrap_err();
    assert!(matches!(err, SuiteError::NotFound(_)));
    assert_eq!(err.to_string(), "could not find /nonexistent/tests.json");
}

#[test]
fn test_load_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"echo hi": null, "let x=1": ""}}"#).unwrap();
    let suite = TestSuite::load(file.path()).unwrap();
    assert_eq!(commands(&suite), vec!["echo hi", "let x=1"]);
}

#[test]
fn test_load_malformed_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{\"echo hi\": ").unwrap();
    let err = TestSuite::load(file.path()).unwrap_err();
    assert!(matches!(err, SuiteError::Json { .. }));
}

#[test]
fn test_empty_object_is_empty_suite() {
    let suite = TestSuite::from_value(json!({})).unwrap();
    assert!(suite.is_empty());
}
