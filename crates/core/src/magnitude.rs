// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unit hierarchy used when rendering durations as phrases.

use crate::Duration;

/// One step in the formatter's unit hierarchy.
///
/// A magnitude is selected as the coarsest unit for any difference below its
/// `threshold`. Its value is `diff / divisor`, reduced by `modulus` when set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magnitude {
    /// Exclusive upper bound, in nanoseconds.
    pub threshold: u64,
    /// Singular unit noun.
    pub name: &'static str,
    /// Nanoseconds per unit.
    pub divisor: u64,
    /// Number of units that roll over into the next coarser magnitude.
    pub modulus: Option<u64>,
}

const fn nanos(d: Duration) -> u64 {
    d.as_nanos().unsigned_abs()
}

/// Ascending by threshold. The last entry is unbounded and has no modulus.
pub static MAGNITUDES: [Magnitude; 7] = [
    Magnitude {
        threshold: nanos(Duration::MINUTE),
        name: "second",
        divisor: nanos(Duration::SECOND),
        modulus: Some(60),
    },
    Magnitude {
        threshold: nanos(Duration::HOUR),
        name: "minute",
        divisor: nanos(Duration::MINUTE),
        modulus: Some(60),
    },
    Magnitude {
        threshold: nanos(Duration::DAY),
        name: "hour",
        divisor: nanos(Duration::HOUR),
        modulus: Some(24),
    },
    Magnitude {
        threshold: nanos(Duration::WEEK),
        name: "day",
        divisor: nanos(Duration::DAY),
        modulus: Some(7),
    },
    Magnitude {
        threshold: nanos(Duration::MONTH),
        name: "week",
        divisor: nanos(Duration::WEEK),
        modulus: Some(7),
    },
    Magnitude {
        threshold: nanos(Duration::YEAR),
        name: "month",
        divisor: nanos(Duration::MONTH),
        modulus: Some(12),
    },
    Magnitude {
        threshold: u64::MAX,
        name: "year",
        divisor: nanos(Duration::YEAR),
        modulus: None,
    },
];

impl Magnitude {
    /// Index of the coarsest magnitude for `diff`: the first entry whose
    /// threshold is strictly greater, clamped to the last entry.
    pub fn starting_index(diff: u64) -> usize {
        MAGNITUDES
            .partition_point(|m| m.threshold <= diff)
            .min(MAGNITUDES.len() - 1)
    }

    /// Whole units of this magnitude in `diff`, after rollover.
    pub fn value_of(&self, diff: u64) -> u64 {
        let value = diff / self.divisor;
        match self.modulus {
            Some(modulus) => value % modulus,
            None => value,
        }
    }

    /// `"<value> <name>"`, pluralized unless the value is one.
    pub fn part(&self, value: u64) -> String {
        if value == 1 {
            format!("{} {}", value, self.name)
        } else {
            format!("{} {}s", value, self.name)
        }
    }
}

#[cfg(test)]
#[path = "magnitude_tests.rs"]
mod tests;
