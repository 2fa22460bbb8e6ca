// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Duration parse errors.

use thiserror::Error;

/// Errors parsing a textual duration.
///
/// Positions are byte offsets into the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty.
    #[error("empty duration string")]
    Empty,

    /// A component did not start with a number (`"m1"`, `"-"`).
    #[error("expected a number at position {at} in duration {input:?}")]
    MissingNumber { input: String, at: usize },

    /// A number had no unit after it (`"1"`, `"1h30"`).
    #[error("missing unit at position {at} in duration {input:?}")]
    MissingUnit { input: String, at: usize },

    /// The unit suffix is not part of the grammar (`"1d"`, `"1mth"`).
    #[error("unknown unit {unit:?} at position {at} in duration {input:?}")]
    UnknownUnit {
        input: String,
        unit: String,
        at: usize,
    },

    /// The total does not fit a signed 64-bit nanosecond count.
    #[error("duration {input:?} is out of range")]
    Overflow { input: String },
}
