// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Relative time between two instants: `"3 hours 12 minutes"`.
//!
//! The order of the instants does not matter; only the absolute difference
//! is rendered.

use crate::clock::{Clock, SystemClock};
use crate::time_fmt::{format_duration, DEFAULT_MAX_PARTS, DEFAULT_SEPARATOR};
use crate::Duration;
use chrono::{DateTime, Utc};

/// Absolute difference between two instants, saturating at [`Duration::MAX`].
pub fn abs_diff(t1: DateTime<Utc>, t2: DateTime<Utc>) -> Duration {
    if t1 > t2 {
        Duration::from(t1 - t2)
    } else {
        Duration::from(t2 - t1)
    }
}

pub fn relative_time(
    t1: DateTime<Utc>,
    t2: DateTime<Utc>,
    max_parts: usize,
    separator: &str,
) -> String {
    format_duration(abs_diff(t1, t2), max_parts, separator)
}

/// [`relative_time`] with two parts joined by a space.
pub fn relative_time_default(t1: DateTime<Utc>, t2: DateTime<Utc>) -> String {
    relative_time(t1, t2, DEFAULT_MAX_PARTS, DEFAULT_SEPARATOR)
}

/// Time elapsed since `t`, read from the system clock on every call.
pub fn time_since(t: DateTime<Utc>) -> String {
    time_since_with(&SystemClock, t)
}

pub fn time_since_with(clock: &impl Clock, t: DateTime<Utc>) -> String {
    relative_time_default(clock.now(), t)
}

#[cfg(test)]
#[path = "relative_tests.rs"]
mod tests;
