// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable rendering of a breakdown.

use crate::breakdown::{Breakdown, Sign};
use crate::unit::{UnitKind, Units};

/// Policy controlling which units are shown and how they are named.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show at most this many units; 0 shows all of them.
    pub limit_first_n: usize,
    /// Largest unit shown. Coarser magnitudes are folded into it.
    pub limit_to_unit: Option<UnitKind>,
    /// Smallest unit shown. Finer magnitudes are dropped.
    pub min_unit: Option<UnitKind>,
    pub units: Units,
}

impl RenderOptions {
    /// Largest unit allowed on output.
    fn coarsest(&self) -> UnitKind {
        self.limit_to_unit.unwrap_or(UnitKind::Year)
    }

    /// Smallest unit shown. The declared precision only truncates a
    /// sub-second fraction, so it never hides seconds or anything coarser.
    /// Never coarser than [`Self::coarsest`].
    fn finest(&self, precision: Option<UnitKind>) -> UnitKind {
        self.clamp(precision.map(|p| p.finest(UnitKind::Second)))
    }

    /// Unit of the `"0 <plural>"` fallback: the declared precision as
    /// written, kept inside the allowed window.
    fn zero_unit(&self, precision: Option<UnitKind>) -> UnitKind {
        self.clamp(precision)
    }

    fn clamp(&self, unit: Option<UnitKind>) -> UnitKind {
        let finest = self
            .min_unit
            .unwrap_or(UnitKind::Microsecond)
            .coarsest(unit.unwrap_or(UnitKind::Microsecond));
        finest.finest(self.coarsest())
    }
}

/// Render a breakdown as `"<count> <name>"` fragments joined by spaces.
///
/// `precision` is the finest unit the input was written in, if known; it
/// drops fractions of a second below it and names the unit of a zero
/// result. When nothing is left to show (a zero breakdown, or every
/// non-zero unit outside the allowed window) a single `"0 <plural>"` is
/// rendered instead.
pub fn render(
    breakdown: &Breakdown,
    sign: Sign,
    precision: Option<UnitKind>,
    options: &RenderOptions,
) -> String {
    let coarsest = options.coarsest();
    let finest = options.finest(precision);
    let limit = match options.limit_first_n {
        0 => usize::MAX,
        n => n,
    };

    let mut fragments: Vec<String> = breakdown
        .regroup(options.limit_to_unit)
        .iter()
        .filter(|(kind, _)| !kind.is_coarser_than(coarsest) && !finest.is_coarser_than(*kind))
        .filter(|(_, value)| *value > 0)
        .take(limit)
        .map(|(kind, value)| fragment(value, kind, &options.units))
        .collect();
    if fragments.is_empty() {
        fragments.push(fragment(0, options.zero_unit(precision), &options.units));
    }

    let mut output = fragments.join(" ");
    if sign.is_negative() {
        output.insert(0, '-');
    }
    output
}

fn fragment(value: u128, kind: UnitKind, units: &Units) -> String {
    format!("{} {}", value, units.get(kind).name_for(value))
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
