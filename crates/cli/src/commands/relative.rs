// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `reltime since` and `reltime between`: distance between instants.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use reltime_core::relative::abs_diff;
use reltime_core::{Clock, FormatOptions};
use serde::Serialize;

use super::format::PhraseArgs;
use crate::output::{self, OutputFormat};

#[derive(Args, Debug)]
pub struct SinceArgs {
    /// RFC 3339 timestamp, e.g. 2024-01-03T15:04:05Z
    pub time: String,
    #[command(flatten)]
    pub phrase: PhraseArgs,
}

#[derive(Args, Debug)]
pub struct BetweenArgs {
    /// First RFC 3339 timestamp
    pub from: String,
    /// Second RFC 3339 timestamp (order does not matter)
    pub to: String,
    #[command(flatten)]
    pub phrase: PhraseArgs,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Relative {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub nanos: i64,
    pub text: String,
}

pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    let t = DateTime::parse_from_rfc3339(s)
        .with_context(|| format!("invalid timestamp {:?}", s))?;
    Ok(t.with_timezone(&Utc))
}

pub fn relative(from: DateTime<Utc>, to: DateTime<Utc>, options: &FormatOptions) -> Relative {
    let diff = abs_diff(from, to);
    Relative {
        from,
        to,
        nanos: diff.as_nanos(),
        text: options.format(diff),
    }
}

pub fn since(args: SinceArgs, clock: &impl Clock) -> Result<Relative> {
    let then = parse_timestamp(&args.time)?;
    Ok(relative(clock.now(), then, &args.phrase.options()))
}

pub fn between(args: BetweenArgs) -> Result<Relative> {
    let from = parse_timestamp(&args.from)?;
    let to = parse_timestamp(&args.to)?;
    Ok(relative(from, to, &args.phrase.options()))
}

pub fn handle_since(args: SinceArgs, clock: &impl Clock, format: OutputFormat) -> Result<()> {
    let rel = since(args, clock)?;
    output::print(format, &rel.text, &rel)
}

pub fn handle_between(args: BetweenArgs, format: OutputFormat) -> Result<()> {
    let rel = between(args)?;
    output::print(format, &rel.text, &rel)
}

#[cfg(test)]
#[path = "relative_tests.rs"]
mod tests;
