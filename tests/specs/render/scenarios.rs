//! Rendering scenarios
//!
//! Textual and machine durations rendered with the default options.

use crate::prelude::*;

#[test]
fn one_hour() {
    text("1h").renders("1 hour");
}

#[test]
fn exact_year_boundary() {
    text("8760h").renders("1 year");
    interval(Interval::from_secs(8_760 * HOUR_SECS)).renders("1 year");
}

#[test]
fn just_below_a_year() {
    text("8759h").renders("52 weeks 23 hours");
}

#[test]
fn year_plus_remainder() {
    text("8784h").renders("1 year 1 day");
    text("17521h").renders("2 years 1 hour");
}

#[test]
fn negative_durations_have_one_leading_sign() {
    text("-100s").renders("-1 minute 40 seconds");
    interval(Interval::from_secs(-3 * HOUR_SECS - 4)).renders("-3 hours 4 seconds");
}

#[test]
fn overview_example() {
    text("354h22m3.24s").renders("2 weeks 18 hours 22 minutes 3 seconds");
}

#[test]
fn machine_intervals_show_sub_second_units() {
    interval(Interval::from_millis(1_275_723_240))
        .renders("2 weeks 18 hours 22 minutes 3 seconds 240 milliseconds");
    interval(Interval::from_micros(1)).renders("1 microsecond");
}

#[test]
fn zero_renders_in_the_written_unit() {
    text("0s").renders("0 seconds");
    text("0m").renders("0 minutes");
    text("0h").renders("0 hours");
    text("0ms").renders("0 milliseconds");
    text("0h0m").renders("0 minutes");
}

#[test]
fn zero_machine_interval_uses_the_finest_unit() {
    interval(Interval::ZERO).renders("0 microseconds");
}

#[test]
fn negative_zero_is_kept_as_written() {
    text("-0h").renders("-0 hours");
}

#[test]
fn zero_units_are_suppressed() {
    text("1m0s").renders("1 minute");
    text("0m2s").renders("2 seconds");
    text("168h0m1s").renders("1 week 1 second");
}

#[test]
fn singular_only_for_one() {
    text("1m1s").renders("1 minute 1 second");
    text("2m2s").renders("2 minutes 2 seconds");
    text("25h").renders("1 day 1 hour");
}

#[test]
fn fractions_of_coarse_units_spill_into_finer_units() {
    text("1.5h").renders("1 hour 30 minutes");
    text("2.75h").renders("2 hours 45 minutes");
    text("1.5m").renders("1 minute 30 seconds");
}

#[test]
fn sub_second_remainder_renders_zero_seconds() {
    text("0.5s").renders("0 seconds");
    text("-0.5s").renders("-0 seconds");
}
