// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Duration literal parser.
//!
//! Grammar:
//!
//! ```text
//! duration := sign? ("0" | part+)
//! part     := digits? ("." digits?)? unit      (at least one digit per part)
//! sign     := "-" | "+"
//! unit     := "ns" | "us" | "µs" | "μs" | "ms" | "s" | "m" | "h" | "d" | "w"
//! ```
//!
//! Integer digits are accumulated exactly; fractional digits go through `f64`
//! only for the sub-unit remainder. Any overflow of the `i64` nanosecond range
//! is an error, never a wrapped value.

use crate::parse_error::ParseDurationError;
use crate::Duration;

/// Recognized unit tokens and their size in nanoseconds.
static UNITS: [(&str, i64); 10] = [
    ("ns", Duration::NANOSECOND.as_nanos()),
    ("us", Duration::MICROSECOND.as_nanos()),
    ("\u{00B5}s", Duration::MICROSECOND.as_nanos()), // micro sign
    ("\u{03BC}s", Duration::MICROSECOND.as_nanos()), // greek small mu
    ("ms", Duration::MILLISECOND.as_nanos()),
    ("s", Duration::SECOND.as_nanos()),
    ("m", Duration::MINUTE.as_nanos()),
    ("h", Duration::HOUR.as_nanos()),
    ("d", Duration::DAY.as_nanos()),
    ("w", Duration::WEEK.as_nanos()),
];

fn unit_size(token: &str) -> Option<i64> {
    UNITS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, size)| *size)
}

/// Parse a duration literal such as `"1h30m"`, `"0.5h"` or `"-1d"`.
///
/// # Examples
///
/// ```
/// use reltime_core::{parse_duration, Duration};
///
/// assert_eq!(parse_duration("1h30m")?, Duration::from_minutes(90));
/// assert_eq!(parse_duration("-1d")?, Duration::from_hours(-24));
/// assert_eq!(parse_duration("-0")?, Duration::ZERO);
/// # Ok::<(), reltime_core::ParseDurationError>(())
/// ```
pub fn parse_duration(input: &str) -> Result<Duration, ParseDurationError> {
    let result = DurationParser::new(input).parse();
    if let Err(e) = &result {
        tracing::debug!(input, error = %e, "rejected duration literal");
    }
    result
}

/// One parsed `digits.digits unit` group, before scaling into the total.
struct Part {
    whole: i64,
    frac: i64,
    scale: f64,
    unit: i64,
}

/// Forward-only cursor over the literal. Never backtracks.
struct DurationParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> DurationParser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn no_digits(&self) -> ParseDurationError {
        ParseDurationError::NoDigits {
            input: self.input.to_string(),
        }
    }

    fn overflow(&self) -> ParseDurationError {
        ParseDurationError::Overflow {
            input: self.input.to_string(),
        }
    }

    fn parse(mut self) -> Result<Duration, ParseDurationError> {
        if self.input.is_empty() {
            return Err(ParseDurationError::EmptyInput);
        }

        let negative = match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                true
            }
            Some(b'+') => {
                self.pos += 1;
                false
            }
            _ => false,
        };

        if self.rest() == "0" {
            return Ok(Duration::ZERO);
        }
        if self.at_end() {
            return Err(self.no_digits());
        }

        let mut total: i64 = 0;
        while !self.at_end() {
            let part = self.part()?;
            let value = self.scale_part(&part)?;
            total = total
                .checked_add(value)
                .ok_or_else(|| self.overflow())?;
        }

        // total is non-negative here, so negation cannot overflow.
        Ok(Duration::from_nanos(if negative { -total } else { total }))
    }

    fn part(&mut self) -> Result<Part, ParseDurationError> {
        match self.peek() {
            Some(b'.' | b'0'..=b'9') => {}
            _ => return Err(self.no_digits()),
        }

        let int_start = self.pos;
        let whole = self.leading_int()?;
        let mut digits = self.pos > int_start;

        let (mut frac, mut scale) = (0, 1.0);
        if self.peek() == Some(b'.') {
            self.pos += 1;
            let frac_start = self.pos;
            (frac, scale) = self.leading_fraction();
            digits |= self.pos > frac_start;
        }
        if !digits {
            return Err(self.no_digits());
        }

        let unit = self.unit()?;
        Ok(Part {
            whole,
            frac,
            scale,
            unit,
        })
    }

    /// Consume `[0-9]*`, failing if the value leaves the `i64` range.
    fn leading_int(&mut self) -> Result<i64, ParseDurationError> {
        let mut x: i64 = 0;
        while let Some(c @ b'0'..=b'9') = self.peek() {
            x = x
                .checked_mul(10)
                .and_then(|x| x.checked_add(i64::from(c - b'0')))
                .ok_or_else(|| self.overflow())?;
            self.pos += 1;
        }
        Ok(x)
    }

    /// Consume `[0-9]*` after a decimal point. Digits past the point where
    /// the numerator would overflow are skipped without error; they only cost
    /// precision.
    fn leading_fraction(&mut self) -> (i64, f64) {
        let mut x: i64 = 0;
        let mut scale = 1.0;
        let mut saturated = false;
        while let Some(c @ b'0'..=b'9') = self.peek() {
            self.pos += 1;
            if saturated {
                continue;
            }
            match x
                .checked_mul(10)
                .and_then(|x| x.checked_add(i64::from(c - b'0')))
            {
                Some(y) => {
                    x = y;
                    scale *= 10.0;
                }
                None => saturated = true,
            }
        }
        (x, scale)
    }

    /// Consume the run of bytes up to the next digit or `.` as a unit token.
    fn unit(&mut self) -> Result<i64, ParseDurationError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == b'.' || c.is_ascii_digit() {
                break;
            }
            self.pos += 1;
        }
        // Stops only on ASCII bytes or end of input, so always a char boundary.
        let token = &self.input[start..self.pos];
        if token.is_empty() {
            return Err(ParseDurationError::MissingUnit {
                input: self.input.to_string(),
            });
        }
        unit_size(token).ok_or_else(|| ParseDurationError::UnknownUnit {
            unit: token.to_string(),
            input: self.input.to_string(),
        })
    }

    fn scale_part(&self, part: &Part) -> Result<i64, ParseDurationError> {
        let mut value = part
            .whole
            .checked_mul(part.unit)
            .ok_or_else(|| self.overflow())?;
        if part.frac > 0 {
            // At most one unit (a week of ns), exact in f64.
            let frac = (part.frac as f64 * (part.unit as f64 / part.scale)).round() as i64;
            value = value.checked_add(frac).ok_or_else(|| self.overflow())?;
        }
        Ok(value)
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
