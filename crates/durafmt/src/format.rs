// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `Durafmt` entry point: a decomposed duration plus render options.

use crate::{Error, FormatConfig};
use durafmt_core::{decompose, render, Breakdown, Interval, RenderOptions, Sign, UnitKind, Units};
use durafmt_grammar::parse_duration;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// A duration ready to be rendered as a human-readable phrase.
///
/// Option setters take `&self` and return a new value, so a configured
/// `Durafmt` can be reused and shared freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Durafmt {
    interval: Interval,
    sign: Sign,
    breakdown: Breakdown,
    /// Finest unit written in the textual input, if there was one.
    precision: Option<UnitKind>,
    options: RenderOptions,
}

impl Durafmt {
    /// Wrap a machine interval. Renders down to microseconds.
    pub fn new(interval: Interval) -> Self {
        Self::with_precision(interval, None)
    }

    /// Like [`Durafmt::new`], showing only the first unit.
    pub fn new_short(interval: Interval) -> Self {
        Self::new(interval).limit_first_n(1)
    }

    /// Wrap a machine interval and apply a loaded [`FormatConfig`]. A bad
    /// vocabulary in the config is an error, never a silent fallback.
    pub fn from_config(interval: Interval, config: &FormatConfig) -> Result<Self, Error> {
        Ok(Self::new(interval).with_options(config.render_options()?))
    }

    /// Parse a textual duration (`"1h30m"`). Fractions of a second finer than
    /// the finest unit written are dropped (`"3.24s"` shows no milliseconds).
    pub fn parse(input: &str) -> Result<Self, Error> {
        let parsed = parse_duration(input)?;
        Ok(Self::with_precision(parsed.interval, Some(parsed.precision)))
    }

    /// Like [`Durafmt::parse`], showing only the first unit.
    pub fn parse_short(input: &str) -> Result<Self, Error> {
        Ok(Self::parse(input)?.limit_first_n(1))
    }

    fn with_precision(interval: Interval, precision: Option<UnitKind>) -> Self {
        let (sign, breakdown) = decompose(&interval);
        Self {
            interval,
            sign,
            breakdown,
            precision,
            options: RenderOptions::default(),
        }
    }

    /// Show at most `n` units; 0 removes the limit.
    #[must_use]
    pub fn limit_first_n(&self, n: usize) -> Self {
        self.configure(|options| options.limit_first_n = n)
    }

    /// Show no unit larger than `unit`; larger magnitudes are folded into it.
    #[must_use]
    pub fn limit_to_unit(&self, unit: Option<UnitKind>) -> Self {
        self.configure(|options| options.limit_to_unit = unit)
    }

    /// [`Durafmt::limit_to_unit`] by name (`"days"`). An empty or unknown
    /// name removes the limit.
    #[must_use]
    pub fn limit_to_unit_named(&self, name: &str) -> Self {
        self.limit_to_unit(resolve_unit_name(name, "limit_to_unit"))
    }

    /// Show no unit smaller than `unit`; smaller magnitudes are dropped.
    #[must_use]
    pub fn min_unit(&self, unit: Option<UnitKind>) -> Self {
        self.configure(|options| options.min_unit = unit)
    }

    /// [`Durafmt::min_unit`] by name. An empty or unknown name removes the limit.
    #[must_use]
    pub fn min_unit_named(&self, name: &str) -> Self {
        self.min_unit(resolve_unit_name(name, "min_unit"))
    }

    /// Use another vocabulary for unit names.
    #[must_use]
    pub fn with_units(&self, units: Units) -> Self {
        self.configure(|options| options.units = units)
    }

    /// Replace all render options at once.
    #[must_use]
    pub fn with_options(&self, options: RenderOptions) -> Self {
        self.configure(|current| *current = options)
    }

    fn configure(&self, apply: impl FnOnce(&mut RenderOptions)) -> Self {
        let mut next = self.clone();
        apply(&mut next.options);
        next
    }

    /// Render once with `units`, keeping every other option.
    pub fn format(&self, units: &Units) -> String {
        let options = RenderOptions {
            units: units.clone(),
            ..self.options.clone()
        };
        self.render_with(&options)
    }

    fn render_with(&self, options: &RenderOptions) -> String {
        let rendered = render(&self.breakdown, self.sign, self.precision, options);
        tracing::trace!(interval = ?self.interval, %rendered, "rendered duration");
        rendered
    }

    /// The interval this value was built from.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn breakdown(&self) -> &Breakdown {
        &self.breakdown
    }

    pub fn precision(&self) -> Option<UnitKind> {
        self.precision
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

/// Resolve an option's unit name. Empty and unknown names mean "no limit".
pub(crate) fn resolve_unit_name(name: &str, option: &'static str) -> Option<UnitKind> {
    if name.trim().is_empty() {
        return None;
    }
    match name.parse() {
        Ok(kind) => Some(kind),
        Err(e) => {
            tracing::warn!(option, name, error = %e, "unknown unit name, limit disabled");
            None
        }
    }
}

impl fmt::Display for Durafmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&self.options))
    }
}

impl FromStr for Durafmt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Interval> for Durafmt {
    fn from(interval: Interval) -> Self {
        Self::new(interval)
    }
}

impl From<Duration> for Durafmt {
    fn from(duration: Duration) -> Self {
        Self::new(duration.into())
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
