// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `reltime format`: render a duration literal as a phrase.

use anyhow::Result;
use clap::Args;
use reltime_core::{parse_duration, Duration, FormatOptions};
use serde::Serialize;

use crate::output::{self, OutputFormat};

/// Options shared by every command that renders a phrase.
#[derive(Args, Debug, Default)]
pub struct PhraseArgs {
    /// Maximum number of non-zero parts [env: RELTIME_PARTS] [default: 2]
    #[arg(short = 'n', long = "parts")]
    pub parts: Option<usize>,
    /// Text placed between parts [env: RELTIME_SEPARATOR] [default: " "]
    #[arg(short = 's', long = "separator")]
    pub separator: Option<String>,
}

impl PhraseArgs {
    pub fn options(self) -> FormatOptions {
        crate::env::format_options(self.parts, self.separator)
    }
}

#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Duration literal, e.g. 4m2s or 1.5h
    #[arg(allow_hyphen_values = true)]
    pub duration: String,
    #[command(flatten)]
    pub phrase: PhraseArgs,
}

#[derive(Debug, Serialize)]
struct Formatted<'a> {
    input: &'a str,
    nanos: i64,
    text: String,
}

pub fn render(literal: &str, options: &FormatOptions) -> Result<(Duration, String)> {
    let duration = parse_duration(literal)?;
    let text = options.format(duration);
    tracing::debug!(
        literal,
        nanos = duration.as_nanos(),
        max_parts = options.max_parts,
        "formatted duration"
    );
    Ok((duration, text))
}

pub fn handle(args: FormatArgs, format: OutputFormat) -> Result<()> {
    let options = args.phrase.options();
    let (duration, text) = render(&args.duration, &options)?;
    output::print(
        format,
        &text,
        &Formatted {
            input: &args.duration,
            nanos: duration.as_nanos(),
            text: text.clone(),
        },
    )
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
