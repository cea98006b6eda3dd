//! CLI error handling specs
//!
//! Verify error messages and exit codes for invalid input.

use crate::prelude::*;

#[test]
fn unknown_unit_text() {
    cli()
        .args(&["parse", "1x"])
        .fails()
        .code(1)
        .stderr_has(r#"Error: invalid duration "1x": unknown unit "x""#);
}

#[test]
fn no_digits_text() {
    cli()
        .args(&["parse", "-.s"])
        .fails()
        .stderr_has("no digits");
}

#[test]
fn empty_literal_text() {
    cli()
        .args(&["format", ""])
        .fails()
        .stderr_has("empty input");
}

#[test]
fn unknown_unit_json() {
    let run = cli().args(&["-o", "json", "parse", "1x"]).fails().code(1);
    let body = run.json();
    assert_eq!(body["code"], "unknown_unit");
    assert_eq!(body["error"], r#"invalid duration "1x": unknown unit "x""#);
}

#[test]
fn bad_timestamp_json() {
    let run = cli()
        .args(&["since", "yesterday", "--output", "json"])
        .fails();
    assert_eq!(run.json()["code"], "invalid_timestamp");
}

#[test]
fn unknown_subcommand_is_usage_error() {
    cli().args(&["frobnicate"]).fails().code(2);
}
