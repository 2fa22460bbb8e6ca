// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unit kinds, their fixed conversion ratios, and localizable unit names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MICROS_PER_MILLISECOND: u128 = 1_000;
const MICROS_PER_SECOND: u128 = 1_000 * MICROS_PER_MILLISECOND;
const MICROS_PER_MINUTE: u128 = 60 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: u128 = 60 * MICROS_PER_MINUTE;
const MICROS_PER_DAY: u128 = 24 * MICROS_PER_HOUR;
const MICROS_PER_WEEK: u128 = 7 * MICROS_PER_DAY;
/// A year is a fixed 365 days (8760 hours); no calendar rules apply.
const MICROS_PER_YEAR: u128 = 365 * MICROS_PER_DAY;

/// One of the eight granularities a duration is broken into.
///
/// Variants are declared coarsest first, so [`UnitKind::index`] doubles as
/// the position of the unit inside a [`crate::Breakdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Year,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
    Microsecond,
}

impl UnitKind {
    /// All unit kinds, coarsest first.
    pub const ALL: [UnitKind; 8] = [
        UnitKind::Year,
        UnitKind::Week,
        UnitKind::Day,
        UnitKind::Hour,
        UnitKind::Minute,
        UnitKind::Second,
        UnitKind::Millisecond,
        UnitKind::Microsecond,
    ];

    /// Position in [`UnitKind::ALL`] (0 = year, 7 = microsecond).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Length of one unit in microseconds.
    pub const fn micros(self) -> u128 {
        match self {
            UnitKind::Year => MICROS_PER_YEAR,
            UnitKind::Week => MICROS_PER_WEEK,
            UnitKind::Day => MICROS_PER_DAY,
            UnitKind::Hour => MICROS_PER_HOUR,
            UnitKind::Minute => MICROS_PER_MINUTE,
            UnitKind::Second => MICROS_PER_SECOND,
            UnitKind::Millisecond => MICROS_PER_MILLISECOND,
            UnitKind::Microsecond => 1,
        }
    }

    pub const fn is_coarser_than(self, other: UnitKind) -> bool {
        self.index() < other.index()
    }

    /// The coarser of two units.
    pub const fn coarsest(self, other: UnitKind) -> UnitKind {
        if self.is_coarser_than(other) {
            self
        } else {
            other
        }
    }

    /// The finer of two units.
    pub const fn finest(self, other: UnitKind) -> UnitKind {
        if self.is_coarser_than(other) {
            other
        } else {
            self
        }
    }

    /// English plural name, also the canonical option value (`"days"`).
    pub const fn name(self) -> &'static str {
        match self {
            UnitKind::Year => "years",
            UnitKind::Week => "weeks",
            UnitKind::Day => "days",
            UnitKind::Hour => "hours",
            UnitKind::Minute => "minutes",
            UnitKind::Second => "seconds",
            UnitKind::Millisecond => "milliseconds",
            UnitKind::Microsecond => "microseconds",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A unit name that does not match any [`UnitKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit name: {0:?}")]
pub struct UnknownUnitError(pub String);

impl FromStr for UnitKind {
    type Err = UnknownUnitError;

    /// Accepts English singular or plural names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "year" | "years" => UnitKind::Year,
            "week" | "weeks" => UnitKind::Week,
            "day" | "days" => UnitKind::Day,
            "hour" | "hours" => UnitKind::Hour,
            "minute" | "minutes" => UnitKind::Minute,
            "second" | "seconds" => UnitKind::Second,
            "millisecond" | "milliseconds" => UnitKind::Millisecond,
            "microsecond" | "microseconds" => UnitKind::Microsecond,
            _ => return Err(UnknownUnitError(s.to_string())),
        };
        Ok(kind)
    }
}

/// Singular and plural display names for one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub singular: String,
    pub plural: String,
}

impl Unit {
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    /// A unit whose plural is the singular with an `s` suffix.
    pub fn regular(singular: impl Into<String>) -> Self {
        let singular = singular.into();
        let plural = format!("{}s", singular);
        Self { singular, plural }
    }

    /// Name to print next to `count`: singular for exactly one, plural otherwise.
    pub fn name_for(&self, count: u128) -> &str {
        if count == 1 {
            &self.singular
        } else {
            &self.plural
        }
    }
}

/// Vocabulary: display names for all eight unit kinds.
///
/// Every field is required, so a vocabulary can never be partially filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Units {
    pub year: Unit,
    pub week: Unit,
    pub day: Unit,
    pub hour: Unit,
    pub minute: Unit,
    pub second: Unit,
    pub millisecond: Unit,
    pub microsecond: Unit,
}

impl Units {
    /// Default English vocabulary.
    pub fn english() -> Self {
        Self::from_array(UnitKind::ALL.map(|kind| {
            let plural = kind.name();
            Unit::new(&plural[..plural.len() - 1], plural)
        }))
    }

    /// Build from names listed coarsest first (year … microsecond).
    pub fn from_array(units: [Unit; 8]) -> Self {
        let [year, week, day, hour, minute, second, millisecond, microsecond] = units;
        Self {
            year,
            week,
            day,
            hour,
            minute,
            second,
            millisecond,
            microsecond,
        }
    }

    pub fn get(&self, kind: UnitKind) -> &Unit {
        match kind {
            UnitKind::Year => &self.year,
            UnitKind::Week => &self.week,
            UnitKind::Day => &self.day,
            UnitKind::Hour => &self.hour,
            UnitKind::Minute => &self.minute,
            UnitKind::Second => &self.second,
            UnitKind::Millisecond => &self.millisecond,
            UnitKind::Microsecond => &self.microsecond,
        }
    }

    /// Iterate names coarsest first.
    pub fn iter(&self) -> impl Iterator<Item = (UnitKind, &Unit)> + '_ {
        UnitKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

impl Default for Units {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
