// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use reltime_core::FormatOptions;

pub const PARTS_VAR: &str = "RELTIME_PARTS";
pub const SEPARATOR_VAR: &str = "RELTIME_SEPARATOR";

/// Value of `key`, or `fallback` when it is not set.
pub fn var_or(key: &str, fallback: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| fallback.to_string())
}

// --- Logging ---

pub const LOG_VAR: &str = "RELTIME_LOG";

/// Tracing filter directives: RELTIME_LOG, default `warn`.
pub fn log_filter() -> String {
    var_or(LOG_VAR, "warn")
}

// --- Formatting ---

/// RELTIME_PARTS, ignored with a warning when it is not a non-negative integer.
pub fn max_parts() -> Option<usize> {
    let raw = std::env::var(PARTS_VAR).ok()?;
    match raw.trim().parse::<usize>() {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::warn!(var = PARTS_VAR, value = %raw, error = %e, "ignoring invalid value");
            None
        }
    }
}

/// RELTIME_SEPARATOR, taken verbatim (an empty value is a valid separator).
pub fn separator() -> Option<String> {
    std::env::var(SEPARATOR_VAR).ok()
}

/// Resolve formatter settings: flags > environment > defaults.
pub fn format_options(parts: Option<usize>, separator: Option<String>) -> FormatOptions {
    let defaults = FormatOptions::default();
    FormatOptions {
        max_parts: parts.or_else(max_parts).unwrap_or(defaults.max_parts),
        separator: separator
            .or_else(self::separator)
            .unwrap_or(defaults.separator),
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
