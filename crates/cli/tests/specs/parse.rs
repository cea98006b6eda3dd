//! `reltime parse` specs

use crate::prelude::*;

#[test]
fn one_day() {
    cli()
        .args(&["parse", "1d"])
        .passes()
        .stdout_eq("86400000000000\n");
}

#[test]
fn fractional_hours() {
    cli()
        .args(&["parse", "0.5h"])
        .passes()
        .stdout_eq("1800000000000\n");
    cli()
        .args(&["parse", "0.10h"])
        .passes()
        .stdout_eq("360000000000\n");
}

#[test]
fn signed_zero() {
    cli().args(&["parse", "-0"]).passes().stdout_eq("0\n");
}

#[test]
fn negative() {
    cli()
        .args(&["parse", "-1h1m"])
        .passes()
        .stdout_eq("-3660000000000\n");
}

#[test]
fn micro_sign() {
    cli()
        .args(&["parse", "3\u{00B5}s"])
        .passes()
        .stdout_eq("3000\n");
}

#[test]
fn json_output() {
    let run = cli().args(&["parse", "1h30m", "-o", "json"]).passes();
    let body = run.json();
    assert_eq!(body["nanos"], 5_400_000_000_000i64);
    assert_eq!(body["display"], "1 hour 30 minutes");
}
