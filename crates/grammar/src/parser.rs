// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Duration string parsing

use crate::ParseError;
use durafmt_core::{Interval, UnitKind};

/// Fraction digits beyond this are ignored; they are below one nanosecond
/// for every unit in the grammar.
const MAX_FRACTION_DIGITS: usize = 18;

/// Largest magnitude accepted for a positive duration.
const MAX_POSITIVE_NANOS: u128 = i64::MAX as u128;
/// Largest magnitude accepted for a negative duration.
const MAX_NEGATIVE_NANOS: u128 = MAX_POSITIVE_NANOS + 1;

/// A unit suffix of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarUnit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
}

impl GrammarUnit {
    /// Look up a unit suffix; both micro signs (U+00B5, U+03BC) are accepted.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        let unit = match suffix {
            "ns" => GrammarUnit::Nanosecond,
            "us" | "\u{00b5}s" | "\u{03bc}s" => GrammarUnit::Microsecond,
            "ms" => GrammarUnit::Millisecond,
            "s" => GrammarUnit::Second,
            "m" => GrammarUnit::Minute,
            "h" => GrammarUnit::Hour,
            _ => return None,
        };
        Some(unit)
    }

    pub const fn nanos(self) -> u128 {
        match self {
            GrammarUnit::Nanosecond => 1,
            GrammarUnit::Microsecond => 1_000,
            GrammarUnit::Millisecond => 1_000_000,
            GrammarUnit::Second => 1_000_000_000,
            GrammarUnit::Minute => 60 * 1_000_000_000,
            GrammarUnit::Hour => 3_600 * 1_000_000_000,
        }
    }

    /// Rendering unit matching this suffix. Nanoseconds have no rendering
    /// unit and map to microseconds.
    pub const fn unit_kind(self) -> UnitKind {
        match self {
            GrammarUnit::Nanosecond | GrammarUnit::Microsecond => UnitKind::Microsecond,
            GrammarUnit::Millisecond => UnitKind::Millisecond,
            GrammarUnit::Second => UnitKind::Second,
            GrammarUnit::Minute => UnitKind::Minute,
            GrammarUnit::Hour => UnitKind::Hour,
        }
    }
}

/// A parsed duration and the finest unit written in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDuration {
    pub interval: Interval,
    /// Finest unit suffix present in the input (`"1h30m"` → minutes).
    pub precision: UnitKind,
}

/// Parse a duration string like `"354h22m3.24s"` or `"-100s"`.
pub fn parse_duration(input: &str) -> Result<ParsedDuration, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    let bytes = input.as_bytes();
    let (negative, mut pos) = match bytes[0] {
        b'-' => (true, 1),
        b'+' => (false, 1),
        _ => (false, 0),
    };
    if pos == bytes.len() {
        return Err(ParseError::MissingNumber {
            input: input.to_string(),
            at: pos,
        });
    }

    let mut total: u128 = 0;
    let mut finest: Option<GrammarUnit> = None;

    while pos < bytes.len() {
        // Number: integer digits, then an optional fraction
        let number_start = pos;
        pos = skip_digits(bytes, pos);
        let int_digits = &input[number_start..pos];
        let mut frac_digits = "";
        if bytes.get(pos) == Some(&b'.') {
            let frac_start = pos + 1;
            pos = skip_digits(bytes, frac_start);
            frac_digits = &input[frac_start..pos];
        }
        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(ParseError::MissingNumber {
                input: input.to_string(),
                at: number_start,
            });
        }

        // Unit: everything up to the next number. Digits and '.' are ASCII,
        // so the slice always ends on a char boundary.
        let unit_start = pos;
        while pos < bytes.len() && bytes[pos] != b'.' && !bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        let suffix = &input[unit_start..pos];
        if suffix.is_empty() {
            return Err(ParseError::MissingUnit {
                input: input.to_string(),
                at: unit_start,
            });
        }
        let unit = GrammarUnit::from_suffix(suffix).ok_or_else(|| ParseError::UnknownUnit {
            input: input.to_string(),
            unit: suffix.to_string(),
            at: unit_start,
        })?;

        total = component_nanos(int_digits, frac_digits, unit)
            .and_then(|nanos| total.checked_add(nanos))
            .ok_or_else(|| ParseError::Overflow {
                input: input.to_string(),
            })?;

        finest = match finest {
            Some(prev) if prev.nanos() <= unit.nanos() => Some(prev),
            _ => Some(unit),
        };
    }

    let max = if negative {
        MAX_NEGATIVE_NANOS
    } else {
        MAX_POSITIVE_NANOS
    };
    if total > max {
        return Err(ParseError::Overflow {
            input: input.to_string(),
        });
    }

    // The loop runs at least once, so a unit was always seen
    let precision = finest.map_or(UnitKind::Microsecond, GrammarUnit::unit_kind);
    tracing::debug!(input, nanos = %total, negative, %precision, "parsed duration");

    Ok(ParsedDuration {
        interval: Interval::new(total, negative),
        precision,
    })
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}

/// Value of one `number unit` component in nanoseconds, truncating any
/// fraction below one nanosecond. `None` on overflow.
fn component_nanos(int_digits: &str, frac_digits: &str, unit: GrammarUnit) -> Option<u128> {
    let whole = digits_value(int_digits)?.checked_mul(unit.nanos())?;

    let frac_digits = &frac_digits[..frac_digits.len().min(MAX_FRACTION_DIGITS)];
    let scale = 10u128.pow(frac_digits.len() as u32);
    let fraction = digits_value(frac_digits)?.checked_mul(unit.nanos())? / scale;

    whole.checked_add(fraction)
}

fn digits_value(digits: &str) -> Option<u128> {
    digits.bytes().try_fold(0u128, |acc, b| {
        acc.checked_mul(10)?.checked_add(u128::from(b - b'0'))
    })
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
