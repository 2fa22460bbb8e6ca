// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Parser for textual durations such as `"1h30m"`, `"-100s"` or `"3.24s"`.
//!
//! # Grammar
//!
//! ```text
//! duration  = [ "+" | "-" ] component { component }
//! component = number unit
//! number    = digits [ "." [ digits ] ] | "." digits
//! unit      = "ns" | "us" | "µs" | "μs" | "ms" | "s" | "m" | "h"
//! ```
//!
//! Components add up and may repeat (`"0m2m3h"` is three hours two minutes).
//! A bare number, even `"0"`, is rejected.
//!
//! The result also records the finest unit written in the input, which the
//! renderer uses as the precision of the duration.

mod parse_error;
mod parser;

pub use parse_error::ParseError;
pub use parser::{parse_duration, GrammarUnit, ParsedDuration};
