// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors produced while reading duration literals.

use serde::Serialize;
use thiserror::Error;

/// Why a duration literal was rejected.
///
/// Every variant carries the complete literal that was being parsed.
///
/// # Examples
///
/// ```
/// use reltime_core::{parse_duration, ParseDurationError};
///
/// assert!(matches!(parse_duration("1x"), Err(ParseDurationError::UnknownUnit { .. })));
/// assert!(matches!(parse_duration(".s"), Err(ParseDurationError::NoDigits { .. })));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseDurationError {
    #[error("invalid duration: empty input")]
    EmptyInput,

    /// A part had neither integer nor fractional digits, as in `".s"`.
    #[error("invalid duration {input:?}: no digits")]
    NoDigits { input: String },

    /// Digits ran to the end of the input with no unit after them.
    #[error("invalid duration {input:?}: missing unit")]
    MissingUnit { input: String },

    #[error("invalid duration {input:?}: unknown unit {unit:?}")]
    UnknownUnit { unit: String, input: String },

    /// The value does not fit in a signed 64-bit count of nanoseconds.
    #[error("invalid duration {input:?}: out of range")]
    Overflow { input: String },
}

/// Machine-readable classification of a [`ParseDurationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    EmptyInput,
    NoDigits,
    MissingUnit,
    UnknownUnit,
    Overflow,
}

impl ParseDurationError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseDurationError::EmptyInput => ParseErrorKind::EmptyInput,
            ParseDurationError::NoDigits { .. } => ParseErrorKind::NoDigits,
            ParseDurationError::MissingUnit { .. } => ParseErrorKind::MissingUnit,
            ParseDurationError::UnknownUnit { .. } => ParseErrorKind::UnknownUnit,
            ParseDurationError::Overflow { .. } => ParseErrorKind::Overflow,
        }
    }

    /// The literal that failed to parse; empty for [`ParseDurationError::EmptyInput`].
    pub fn input(&self) -> &str {
        match self {
            ParseDurationError::EmptyInput => "",
            ParseDurationError::NoDigits { input }
            | ParseDurationError::MissingUnit { input }
            | ParseDurationError::UnknownUnit { input, .. }
            | ParseDurationError::Overflow { input } => input,
        }
    }
}

impl ParseErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ParseErrorKind::EmptyInput => "empty_input",
            ParseErrorKind::NoDigits => "no_digits",
            ParseErrorKind::MissingUnit => "missing_unit",
            ParseErrorKind::UnknownUnit => "unknown_unit",
            ParseErrorKind::Overflow => "overflow",
        }
    }
}
