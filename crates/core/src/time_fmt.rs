// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable duration phrases: `"4 minutes 2 seconds"`, `"1 day"`, `"now"`.

use crate::magnitude::{Magnitude, MAGNITUDES};
use crate::Duration;
use serde::{Deserialize, Serialize};

/// Rendered for any difference under one second.
pub const NOW: &str = "now";

/// Number of parts used by the `*_default` helpers.
pub const DEFAULT_MAX_PARTS: usize = 2;

/// Separator used by the `*_default` helpers.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Render `diff` as at most `max_parts` non-zero parts, coarsest first.
///
/// The sign of `diff` is ignored: a negative duration renders like its
/// magnitude. Anything under one second is `"now"`. Zero-valued magnitudes
/// are skipped without using up a part, so `1 hour 0 minutes 5 seconds`
/// renders as `"1 hour 5 seconds"`.
pub fn format_duration(diff: Duration, max_parts: usize, separator: &str) -> String {
    let mut remaining = diff.unsigned_abs();
    if remaining < Duration::SECOND.unsigned_abs() {
        return NOW.to_string();
    }

    let start = Magnitude::starting_index(remaining);
    let mut parts = Vec::with_capacity(max_parts.min(MAGNITUDES.len()));
    for mag in MAGNITUDES[..=start].iter().rev() {
        if parts.len() >= max_parts {
            break;
        }
        let value = mag.value_of(remaining);
        if value > 0 {
            parts.push(mag.part(value));
            remaining -= value * mag.divisor;
        }
    }

    parts.join(separator)
}

/// [`format_duration`] with two parts joined by a space.
pub fn format_default(diff: Duration) -> String {
    format_duration(diff, DEFAULT_MAX_PARTS, DEFAULT_SEPARATOR)
}

/// Formatter settings, loadable from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub max_parts: usize,
    pub separator: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_parts: DEFAULT_MAX_PARTS,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl FormatOptions {
    pub fn new(max_parts: usize, separator: impl Into<String>) -> Self {
        Self {
            max_parts,
            separator: separator.into(),
        }
    }

    pub fn format(&self, diff: Duration) -> String {
        format_duration(diff, self.max_parts, &self.separator)
    }
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
