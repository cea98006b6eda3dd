//! `reltime format` specs

use crate::prelude::*;

#[test]
fn minutes_and_seconds() {
    cli()
        .args(&["format", "4m2s"])
        .passes()
        .stdout_eq("4 minutes 2 seconds\n");
}

#[test]
fn under_a_second_is_now() {
    cli().args(&["format", "999ms"]).passes().stdout_eq("now\n");
}

#[test]
fn negative_literal() {
    cli()
        .args(&["format", "-25h"])
        .passes()
        .stdout_eq("1 day 1 hour\n");
}

#[test]
fn parts_and_separator_flags() {
    cli()
        .args(&["format", "1d1h1m1s", "-n", "4", "-s", ", "])
        .passes()
        .stdout_eq("1 day, 1 hour, 1 minute, 1 second\n");
}

#[test]
fn env_configures_defaults() {
    cli()
        .args(&["format", "1d1h1m1s"])
        .env("RELTIME_PARTS", "3")
        .env("RELTIME_SEPARATOR", " + ")
        .passes()
        .stdout_eq("1 day + 1 hour + 1 minute\n");
}

#[test]
fn flags_beat_env() {
    cli()
        .args(&["format", "1d1h1m1s", "--parts", "1"])
        .env("RELTIME_PARTS", "3")
        .passes()
        .stdout_eq("1 day\n");
}

#[test]
fn json_output() {
    let run = cli().args(&["format", "90s", "-o", "json"]).passes();
    let body = run.json();
    assert_eq!(body["text"], "1 minute 30 seconds");
    assert_eq!(body["nanos"], 90_000_000_000i64);
    assert_eq!(body["input"], "90s");
}
