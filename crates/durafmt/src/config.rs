// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Render options loaded from TOML.
//!
//! ```toml
//! limit_first_n = 2
//! limit_to_unit = "days"
//! min_unit = "seconds"
//! units = "ano,semana,dia,hora,minuto,segundo,milissegundo,microssegundo"
//! ```
//!
//! The vocabulary can also be given as a table with all eight units:
//!
//! ```toml
//! [vocabulary]
//! year = { singular = "ano", plural = "anos" }
//! # ... week through microsecond
//! ```

use crate::format::resolve_unit_name;
use crate::Error;
use durafmt_core::{RenderOptions, Units, UnitsCoder, DEFAULT_UNITS_CODER};
use serde::{Deserialize, Serialize};

/// Render configuration as written in a TOML document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    /// Show at most this many units (0 = all)
    #[serde(default)]
    pub limit_first_n: usize,
    /// Largest unit shown, e.g. "days"; unknown names disable the limit
    #[serde(default)]
    pub limit_to_unit: Option<String>,
    /// Smallest unit shown, e.g. "seconds"; unknown names disable the limit
    #[serde(default)]
    pub min_unit: Option<String>,
    /// Encoded vocabulary, decoded with `plural_sep` and `units_sep`
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub plural_sep: Option<String>,
    #[serde(default)]
    pub units_sep: Option<String>,
    /// Vocabulary as a table; conflicts with `units`
    #[serde(default)]
    pub vocabulary: Option<Units>,
}

impl FormatConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    /// Coder for the `units` string, defaulting to `":"` and `","`.
    pub fn coder(&self) -> UnitsCoder<'_> {
        UnitsCoder::new(
            self.plural_sep
                .as_deref()
                .unwrap_or(DEFAULT_UNITS_CODER.plural_sep),
            self.units_sep
                .as_deref()
                .unwrap_or(DEFAULT_UNITS_CODER.units_sep),
        )
    }

    /// Validate the configuration into render options.
    ///
    /// A vocabulary that fails to decode is an error; there is no fallback
    /// to the default names.
    pub fn render_options(&self) -> Result<RenderOptions, Error> {
        let units = match (&self.units, &self.vocabulary) {
            (Some(_), Some(_)) => return Err(Error::ConflictingUnits),
            (Some(encoded), None) => self.coder().decode(encoded)?,
            (None, Some(vocabulary)) => vocabulary.clone(),
            (None, None) => Units::default(),
        };

        Ok(RenderOptions {
            limit_first_n: self.limit_first_n,
            limit_to_unit: self
                .limit_to_unit
                .as_deref()
                .and_then(|name| resolve_unit_name(name, "limit_to_unit")),
            min_unit: self
                .min_unit
                .as_deref()
                .and_then(|name| resolve_unit_name(name, "min_unit")),
            units,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
