// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Serde adapter that reads and writes a [`Duration`] as a literal string.
//!
//! ```
//! use reltime_core::Duration;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Config {
//!     #[serde(with = "reltime_core::serde_literal")]
//!     timeout: Duration,
//! }
//!
//! let config: Config = serde_json::from_str(r#"{"timeout": "1m30s"}"#).unwrap();
//! assert_eq!(config.timeout, Duration::from_secs(90));
//! ```
//!
//! Serialization writes the exact nanosecond count with the `ns` unit, so a
//! serialized value reads back unchanged. [`Duration::MIN`] is the exception:
//! its magnitude has no positive `i64` counterpart and fails to parse.

use crate::parse::parse_duration;
use crate::Duration;
use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&format_args!("{}ns", duration.as_nanos()))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(LiteralVisitor)
}

struct LiteralVisitor;

impl Visitor<'_> for LiteralVisitor {
    type Value = Duration;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a duration literal such as \"1h30m\"")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        parse_duration(value).map_err(E::custom)
    }
}

#[cfg(test)]
#[path = "serde_literal_tests.rs"]
mod tests;
