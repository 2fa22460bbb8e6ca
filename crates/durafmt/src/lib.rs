// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! durafmt: format durations as human-readable phrases
//!
//! ```
//! use durafmt::Durafmt;
//!
//! let d = Durafmt::parse("354h22m3.24s")?;
//! assert_eq!(d.to_string(), "2 weeks 18 hours 22 minutes 3 seconds");
//! assert_eq!(d.limit_first_n(2).to_string(), "2 weeks 18 hours");
//! assert_eq!(
//!     d.limit_to_unit_named("days").to_string(),
//!     "14 days 18 hours 22 minutes 3 seconds"
//! );
//! # Ok::<(), durafmt::Error>(())
//! ```

mod config;
mod error;
mod format;

pub use config::FormatConfig;
pub use error::Error;
pub use format::Durafmt;

pub use durafmt_core::{
    decompose, render, Breakdown, CodecError, Interval, RenderOptions, Sign, Unit, UnitKind,
    Units, UnitsCoder, DEFAULT_UNITS_CODER,
};
pub use durafmt_grammar::{parse_duration, ParseError, ParsedDuration};
