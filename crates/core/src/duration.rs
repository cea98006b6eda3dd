// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Signed elapsed-time value with nanosecond resolution.
//!
//! Unlike [`std::time::Duration`], a [`Duration`] can be negative. All
//! arithmetic is checked; there are no operator impls that could wrap.

use crate::parse_error::ParseDurationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A signed count of elapsed nanoseconds.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Duration(i64);

impl Duration {
    pub const ZERO: Duration = Duration(0);
    pub const MAX: Duration = Duration(i64::MAX);
    pub const MIN: Duration = Duration(i64::MIN);

    pub const NANOSECOND: Duration = Duration(1);
    pub const MICROSECOND: Duration = Duration(1_000);
    pub const MILLISECOND: Duration = Duration(1_000_000);
    pub const SECOND: Duration = Duration(1_000_000_000);
    pub const MINUTE: Duration = Duration(60 * Self::SECOND.0);
    pub const HOUR: Duration = Duration(60 * Self::MINUTE.0);
    pub const DAY: Duration = Duration(24 * Self::HOUR.0);
    pub const WEEK: Duration = Duration(7 * Self::DAY.0);
    /// Thirty days. Not a calendar month.
    pub const MONTH: Duration = Duration(30 * Self::DAY.0);
    /// Twelve thirty-day months (360 days).
    pub const YEAR: Duration = Duration(12 * Self::MONTH.0);

    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    /// Saturates at [`Duration::MAX`] / [`Duration::MIN`].
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis.saturating_mul(Self::MILLISECOND.0))
    }

    /// Saturates at [`Duration::MAX`] / [`Duration::MIN`].
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(Self::SECOND.0))
    }

    /// Saturates at [`Duration::MAX`] / [`Duration::MIN`].
    pub const fn from_minutes(minutes: i64) -> Self {
        Self(minutes.saturating_mul(Self::MINUTE.0))
    }

    /// Saturates at [`Duration::MAX`] / [`Duration::MIN`].
    pub const fn from_hours(hours: i64) -> Self {
        Self(hours.saturating_mul(Self::HOUR.0))
    }

    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Magnitude in nanoseconds. Total for every value, including [`Duration::MIN`].
    pub const fn unsigned_abs(self) -> u64 {
        self.0.unsigned_abs()
    }

    pub fn checked_add(self, rhs: Duration) -> Option<Duration> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Duration) -> Option<Duration> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    pub fn checked_mul(self, rhs: i64) -> Option<Duration> {
        self.0.checked_mul(rhs).map(Self)
    }

    pub fn checked_neg(self) -> Option<Duration> {
        self.0.checked_neg().map(Self)
    }

    pub fn saturating_add(self, rhs: Duration) -> Duration {
        Self(self.0.saturating_add(rhs.0))
    }

    pub fn saturating_sub(self, rhs: Duration) -> Duration {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl TryFrom<std::time::Duration> for Duration {
    type Error = ParseDurationError;

    fn try_from(value: std::time::Duration) -> Result<Self, Self::Error> {
        i64::try_from(value.as_nanos())
            .map(Self)
            .map_err(|_| ParseDurationError::Overflow {
                input: format!("{:?}", value),
            })
    }
}

impl From<chrono::TimeDelta> for Duration {
    /// Saturates when the delta does not fit in `i64` nanoseconds (about 292 years).
    fn from(delta: chrono::TimeDelta) -> Self {
        match delta.num_nanoseconds() {
            Some(nanos) => Self(nanos),
            None if delta < chrono::TimeDelta::zero() => Self::MIN,
            None => Self::MAX,
        }
    }
}

impl FromStr for Duration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_duration(s)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::time_fmt::format_default(*self))
    }
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
