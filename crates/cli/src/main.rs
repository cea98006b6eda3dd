// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! reltime - human-readable durations and duration literals

mod commands;
mod env;
mod output;

use output::{ErrorBody, OutputFormat};

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{format, parse, relative};
use reltime_core::SystemClock;

#[derive(Parser)]
#[command(
    name = "reltime",
    version,
    about = "Render durations as phrases and parse duration literals"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a duration literal as a phrase ("4 minutes 2 seconds")
    Format(format::FormatArgs),
    /// Print the exact nanosecond value of a duration literal
    Parse(parse::ParseArgs),
    /// Time elapsed since a timestamp
    Since(relative::SinceArgs),
    /// Time between two timestamps
    Between(relative::BetweenArgs),
}

fn cli_command() -> clap::Command {
    Cli::command()
}

fn main() {
    setup_logging();

    let cli = Cli::parse();
    let format = cli.output;
    if let Err(e) = run(cli) {
        let msg = format_error(&e);
        report_error(&e, msg, format);
        std::process::exit(1);
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_new(env::log_filter()).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Text mode writes to stderr; JSON mode writes an error body to stdout.
fn report_error(err: &anyhow::Error, msg: String, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            eprintln!("Error: {}", msg);
        }
        OutputFormat::Json => {
            let body = ErrorBody::from_error(err, msg);
            if let Err(e) = output::print_json(&body) {
                eprintln!("Error: {}", e);
            }
        }
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain. Otherwise the chain is appended after a colon so
/// context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for cause in err.chain().skip(1) {
        buf.push_str(&format!(": {}", cause));
    }
    buf
}

fn run(cli: Cli) -> Result<()> {
    let format = cli.output;

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // No subcommand provided, print help and exit 0
            cli_command().print_help()?;
            println!();
            return Ok(());
        }
    };

    match command {
        Commands::Format(args) => format::handle(args, format),
        Commands::Parse(args) => parse::handle(args, format),
        Commands::Since(args) => relative::handle_since(args, &SystemClock, format),
        Commands::Between(args) => relative::handle_between(args, format),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
