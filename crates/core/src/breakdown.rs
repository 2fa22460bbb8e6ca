// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decomposition of an interval into per-unit magnitudes.
//!
//! Uses the fixed ratios of [`UnitKind::micros`]: a year is 365 days, a week
//! is 7 days. The split is hierarchical, so whatever is left after whole
//! years is expressed in weeks (at most 52) and finer units.

use crate::interval::Interval;
use crate::unit::UnitKind;

/// Sign of an interval, applied once in front of a rendered duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

/// Magnitudes for all eight units, coarsest first. Never carries a sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Breakdown {
    values: [u128; 8],
}

impl Breakdown {
    /// Split a microsecond total starting at years.
    pub fn from_micros(total: u128) -> Self {
        Self::split(total, UnitKind::Year)
    }

    /// Split `total` so that no unit coarser than `coarsest` is populated.
    fn split(total: u128, coarsest: UnitKind) -> Self {
        let mut values = [0; 8];
        let mut rest = total;
        for kind in UnitKind::ALL.into_iter().skip(coarsest.index()) {
            values[kind.index()] = rest / kind.micros();
            rest %= kind.micros();
        }
        Self { values }
    }

    pub fn get(&self, kind: UnitKind) -> u128 {
        self.values[kind.index()]
    }

    /// Iterate `(unit, magnitude)` pairs coarsest first.
    pub fn iter(&self) -> impl Iterator<Item = (UnitKind, u128)> + '_ {
        UnitKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.values[kind.index()]))
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0)
    }

    /// Recompose the exact microsecond total.
    pub fn total_micros(&self) -> u128 {
        self.iter().map(|(kind, value)| value * kind.micros()).sum()
    }

    /// Rebuild the breakdown with `coarsest` as the largest populated unit,
    /// folding coarser magnitudes into it. `None` returns the breakdown as is.
    pub fn regroup(&self, coarsest: Option<UnitKind>) -> Self {
        match coarsest {
            Some(kind) => Self::split(self.total_micros(), kind),
            None => *self,
        }
    }
}

/// Decompose an interval into its sign and breakdown.
pub fn decompose(interval: &Interval) -> (Sign, Breakdown) {
    let sign = if interval.is_negative() {
        Sign::Negative
    } else {
        Sign::Positive
    };
    (sign, Breakdown::from_micros(interval.magnitude_micros()))
}

#[cfg(test)]
#[path = "breakdown_tests.rs"]
mod tests;
