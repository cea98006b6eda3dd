// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use reltime_core::ParseDurationError;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Body written to stdout when a command fails in JSON mode.
#[derive(Debug, Serialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

impl ErrorBody {
    /// Classify an error chain: duration literal failures keep their parse
    /// kind, timestamps and anything else get a generic code.
    pub fn from_error(err: &anyhow::Error, message: String) -> Self {
        let code = if let Some(e) = err.downcast_ref::<ParseDurationError>() {
            e.kind().as_str()
        } else if err.downcast_ref::<chrono::ParseError>().is_some() {
            "invalid_timestamp"
        } else {
            "error"
        };
        Self {
            error: message,
            code,
        }
    }
}

/// Print a value as a single line of JSON.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Print `text` or the JSON rendering of `value` depending on `format`.
pub fn print<T: Serialize>(format: OutputFormat, text: &str, value: &T) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", text);
            Ok(())
        }
        OutputFormat::Json => print_json(value),
    }
}
