//! `reltime since` and `reltime between` specs

use crate::prelude::*;

#[test]
fn between_defaults() {
    cli()
        .args(&["between", "2024-01-03T15:04:05Z", "2024-01-03T15:00:03Z"])
        .passes()
        .stdout_eq("4 minutes 2 seconds\n");
}

#[test]
fn between_reversed_with_offsets() {
    cli()
        .args(&[
            "between",
            "2024-01-03T16:00:03+01:00",
            "2024-01-03T15:04:05Z",
        ])
        .passes()
        .stdout_eq("4 minutes 2 seconds\n");
}

#[test]
fn between_custom_parts() {
    cli()
        .args(&[
            "between",
            "2024-01-03T15:04:05Z",
            "2024-01-02T14:03:04Z",
            "-n",
            "4",
            "-s",
            ", ",
        ])
        .passes()
        .stdout_eq("1 day, 1 hour, 1 minute, 1 second\n");
}

#[test]
fn since_long_ago_counts_years() {
    cli()
        .args(&["since", "1990-01-01T00:00:00Z", "-n", "1"])
        .passes()
        .stdout_has(" years\n");
}

#[test]
fn since_json() {
    let run = cli()
        .args(&["since", "2000-01-01T00:00:00Z", "-o", "json"])
        .passes();
    let body = run.json();
    assert_eq!(body["to"], "2000-01-01T00:00:00Z");
    assert!(body["nanos"].as_i64().unwrap() > 0);
}
