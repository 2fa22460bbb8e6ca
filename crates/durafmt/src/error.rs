// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the public entry points

use durafmt_core::CodecError;
use durafmt_grammar::ParseError;
use thiserror::Error;

/// Errors surfaced by [`crate::Durafmt`] and [`crate::FormatConfig`]
#[derive(Debug, Error)]
pub enum Error {
    #[error("unrecognized duration syntax: {0}")]
    Parse(#[from] ParseError),
    #[error("invalid unit vocabulary: {0}")]
    Units(#[from] CodecError),
    #[error("TOML config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("config sets both `units` and `vocabulary`")]
    ConflictingUnits,
}
