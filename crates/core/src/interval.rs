// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Signed time intervals.

use std::ops::Neg;
use std::time::Duration;

const NANOS_PER_MICROSECOND: u128 = 1_000;
const NANOS_PER_MILLISECOND: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// A signed span of elapsed time with nanosecond resolution.
///
/// Stored as a magnitude plus a sign bit rather than a signed integer, so an
/// explicitly negative zero (as written `-0s`) survives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Interval {
    nanos: u128,
    negative: bool,
}

impl Interval {
    pub const ZERO: Interval = Interval {
        nanos: 0,
        negative: false,
    };

    pub const fn new(nanos: u128, negative: bool) -> Self {
        Self { nanos, negative }
    }

    pub const fn from_nanos(nanos: i128) -> Self {
        Self::new(nanos.unsigned_abs(), nanos < 0)
    }

    pub const fn from_micros(micros: i64) -> Self {
        Self::scaled(micros, NANOS_PER_MICROSECOND)
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self::scaled(millis, NANOS_PER_MILLISECOND)
    }

    /// Whole seconds, for sources that only resolve to the second.
    pub const fn from_secs(secs: i64) -> Self {
        Self::scaled(secs, NANOS_PER_SECOND)
    }

    const fn scaled(value: i64, nanos_per_unit: u128) -> Self {
        Self::new(value.unsigned_abs() as u128 * nanos_per_unit, value < 0)
    }

    /// Magnitude in nanoseconds, ignoring the sign.
    pub const fn magnitude_nanos(&self) -> u128 {
        self.nanos
    }

    /// Magnitude in whole microseconds; sub-microsecond precision is dropped.
    pub const fn magnitude_micros(&self) -> u128 {
        self.nanos / NANOS_PER_MICROSECOND
    }

    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    pub const fn is_zero(&self) -> bool {
        self.nanos == 0
    }

    pub const fn abs(self) -> Self {
        Self::new(self.nanos, false)
    }

    /// Compact form in the `1h2m3.5s` grammar: hours, minutes, and seconds
    /// with a trimmed fraction. Zero renders as `0s`.
    pub fn to_grammar_string(&self) -> String {
        let total_secs = self.nanos / NANOS_PER_SECOND;
        let fraction = self.nanos % NANOS_PER_SECOND;
        let hours = total_secs / 3600;
        let minutes = (total_secs % 3600) / 60;
        let secs = total_secs % 60;

        let mut out = String::new();
        if self.negative {
            out.push('-');
        }
        if hours > 0 {
            out.push_str(&format!("{}h", hours));
        }
        if hours > 0 || minutes > 0 {
            out.push_str(&format!("{}m", minutes));
        }
        out.push_str(&secs.to_string());
        if fraction > 0 {
            let digits = format!("{:09}", fraction);
            out.push('.');
            out.push_str(digits.trim_end_matches('0'));
        }
        out.push('s');
        out
    }
}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Self::Output {
        Self::new(self.nanos, !self.negative)
    }
}

impl From<Duration> for Interval {
    fn from(duration: Duration) -> Self {
        Self::new(duration.as_nanos(), false)
    }
}

#[cfg(test)]
#[path = "interval_tests.rs"]
mod tests;
