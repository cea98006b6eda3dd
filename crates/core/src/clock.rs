// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock abstraction so "time since" helpers can be tested deterministically.

use chrono::{DateTime, Utc};

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeClock;

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::Clock;
    use crate::Duration;
    use chrono::{DateTime, TimeDelta, Utc};
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Manually driven clock. Clones share the same instant.
    #[derive(Debug, Clone)]
    pub struct FakeClock {
        now: Arc<Mutex<DateTime<Utc>>>,
    }

    impl Default for FakeClock {
        fn default() -> Self {
            Self::new()
        }
    }

    impl FakeClock {
        /// Starts at the Unix epoch.
        pub fn new() -> Self {
            Self::at(DateTime::UNIX_EPOCH)
        }

        pub fn at(now: DateTime<Utc>) -> Self {
            Self {
                now: Arc::new(Mutex::new(now)),
            }
        }

        pub fn set(&self, now: DateTime<Utc>) {
            *self.now.lock() = now;
        }

        pub fn advance(&self, by: Duration) {
            let mut now = self.now.lock();
            *now += TimeDelta::nanoseconds(by.as_nanos());
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock()
        }
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
