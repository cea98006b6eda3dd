// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `reltime parse`: print the exact nanosecond value of a literal.

use anyhow::Result;
use clap::Args;
use reltime_core::parse_duration;
use serde::Serialize;

use crate::output::{self, OutputFormat};

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Duration literal, e.g. 1h30m, -1d or 0.5h
    #[arg(allow_hyphen_values = true)]
    pub duration: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Parsed {
    pub input: String,
    pub nanos: i64,
    pub display: String,
}

pub fn parsed(literal: &str) -> Result<Parsed> {
    let duration = parse_duration(literal)?;
    Ok(Parsed {
        input: literal.to_string(),
        nanos: duration.as_nanos(),
        display: duration.to_string(),
    })
}

pub fn handle(args: ParseArgs, format: OutputFormat) -> Result<()> {
    let parsed = parsed(&args.duration)?;
    output::print(format, &parsed.nanos.to_string(), &parsed)
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
