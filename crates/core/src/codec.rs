// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text encoding for unit vocabularies.
//!
//! A vocabulary is written as eight entries, year first, separated by
//! `units_sep`. Each entry is either a bare singular (`"dia"`, plural
//! becomes `"dias"`) or a `singular<plural_sep>plural` pair (`"mês:meses"`).

use crate::unit::{Unit, UnitKind, Units};
use thiserror::Error;

/// Coder using `":"` between singular and plural and `","` between units.
pub const DEFAULT_UNITS_CODER: UnitsCoder<'static> = UnitsCoder {
    plural_sep: ":",
    units_sep: ",",
};

/// Errors decoding a vocabulary string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("bad parts length: expected 8 units, found {found}")]
    BadPartsLength { found: usize },
    #[error("bad unit pair length in {entry:?}: expected 1 or 2 names, found {parts}")]
    BadUnitPair { entry: String, parts: usize },
    #[error("unit separators must not be empty")]
    EmptySeparator,
}

/// Encoder and decoder for vocabulary strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitsCoder<'a> {
    /// Separates singular and plural, e.g. `"year:years"`.
    pub plural_sep: &'a str,
    /// Separates unit entries, e.g. `"year:years,week:weeks"`.
    pub units_sep: &'a str,
}

impl Default for UnitsCoder<'_> {
    fn default() -> Self {
        DEFAULT_UNITS_CODER
    }
}

impl<'a> UnitsCoder<'a> {
    pub fn new(plural_sep: &'a str, units_sep: &'a str) -> Self {
        Self {
            plural_sep,
            units_sep,
        }
    }

    /// Encode as eight `singular<plural_sep>plural` entries joined by `units_sep`.
    pub fn encode(&self, units: &Units) -> String {
        units
            .iter()
            .map(|(_, unit)| format!("{}{}{}", unit.singular, self.plural_sep, unit.plural))
            .collect::<Vec<_>>()
            .join(self.units_sep)
    }

    /// Decode a vocabulary string. Fails unless exactly eight well-formed
    /// entries are present.
    pub fn decode(&self, s: &str) -> Result<Units, CodecError> {
        if self.plural_sep.is_empty() || self.units_sep.is_empty() {
            return Err(CodecError::EmptySeparator);
        }

        let entries: Vec<&str> = s.split(self.units_sep).collect();
        if entries.len() != UnitKind::ALL.len() {
            return Err(CodecError::BadPartsLength {
                found: entries.len(),
            });
        }

        let units = entries
            .into_iter()
            .map(|entry| self.decode_unit(entry))
            .collect::<Result<Vec<_>, _>>()?;
        let units: [Unit; 8] = units
            .try_into()
            .map_err(|units: Vec<Unit>| CodecError::BadPartsLength { found: units.len() })?;
        Ok(Units::from_array(units))
    }

    fn decode_unit(&self, entry: &str) -> Result<Unit, CodecError> {
        let names: Vec<&str> = entry.split(self.plural_sep).collect();
        match names.as_slice() {
            [singular] => Ok(Unit::regular(*singular)),
            [singular, plural] => Ok(Unit::new(*singular, *plural)),
            _ => Err(CodecError::BadUnitPair {
                entry: entry.to_string(),
                parts: names.len(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
