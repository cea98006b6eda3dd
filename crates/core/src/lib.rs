// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! reltime-core: signed durations, human-readable phrases, and duration literals.
//!
//! ```
//! use reltime_core::{format_duration, parse_duration};
//!
//! let d = parse_duration("4m2s")?;
//! assert_eq!(format_duration(d, 2, " "), "4 minutes 2 seconds");
//! # Ok::<(), reltime_core::ParseDurationError>(())
//! ```

pub mod clock;
pub mod duration;
pub mod magnitude;
pub mod parse;
mod parse_error;
pub mod relative;
pub mod serde_literal;
pub mod time_fmt;

#[cfg(any(test, feature = "test-support"))]
pub use clock::FakeClock;
pub use clock::{Clock, SystemClock};
pub use duration::Duration;
pub use magnitude::{Magnitude, MAGNITUDES};
pub use parse::parse_duration;
pub use parse_error::{ParseDurationError, ParseErrorKind};
pub use relative::{relative_time, relative_time_default, time_since, time_since_with};
pub use time_fmt::{format_default, format_duration, FormatOptions};
