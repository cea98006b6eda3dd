//! CLI help output specs

use crate::prelude::*;

#[test]
fn no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("format")
        .stdout_has("parse")
        .stdout_has("since")
        .stdout_has("between");
}

#[test]
fn format_help_mentions_env() {
    cli()
        .args(&["format", "--help"])
        .passes()
        .stdout_has("RELTIME_PARTS");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
