// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! durafmt-core: unit decomposition and rendering for human-readable durations
//!
//! An [`Interval`] is decomposed into a [`Breakdown`] of eight fixed units
//! (year down to microsecond), then [`render`]ed with a set of
//! [`RenderOptions`] into a phrase like `"2 weeks 18 hours 22 minutes"`.

pub mod breakdown;
pub mod codec;
pub mod interval;
pub mod render;
pub mod unit;

pub use breakdown::{decompose, Breakdown, Sign};
pub use codec::{CodecError, UnitsCoder, DEFAULT_UNITS_CODER};
pub use interval::Interval;
pub use render::{render, RenderOptions};
pub use unit::{Unit, UnitKind, Units, UnknownUnitError};
