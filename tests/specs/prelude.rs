//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for checking rendered durations:
//!
//! ```ignore
//! text("354h22m3.24s").limit_first_n(2).renders("2 weeks 18 hours");
//! text("1d").rejected();
//! ```

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use durafmt::{Durafmt, Error, FormatConfig, Interval, DEFAULT_UNITS_CODER};

pub const HOUR_SECS: i64 = 3_600;

pub const PORTUGUESE: &str = "ano,semana,dia,hora,minuto,segundo,milissegundo,microssegundo";

/// Start a check from a textual duration
pub fn text(input: &str) -> Check {
    Check {
        input: input.to_string(),
        parsed: Durafmt::parse(input),
    }
}

/// Start a check from a machine interval
pub fn interval(interval: Interval) -> Check {
    Check {
        input: format!("{:?}", interval),
        parsed: Ok(Durafmt::new(interval)),
    }
}

/// Install a subscriber that writes through the test harness
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

pub struct Check {
    input: String,
    parsed: Result<Durafmt, Error>,
}

impl Check {
    fn durafmt(&self) -> &Durafmt {
        match &self.parsed {
            Ok(d) => d,
            Err(e) => panic!("{:?} failed to parse: {}", self.input, e),
        }
    }

    fn map(self, f: impl FnOnce(&Durafmt) -> Durafmt) -> Self {
        let next = f(self.durafmt());
        Check {
            input: self.input,
            parsed: Ok(next),
        }
    }

    pub fn limit_first_n(self, n: usize) -> Self {
        self.map(|d| d.limit_first_n(n))
    }

    pub fn limit_to_unit(self, name: &str) -> Self {
        self.map(|d| d.limit_to_unit_named(name))
    }

    pub fn min_unit(self, name: &str) -> Self {
        self.map(|d| d.min_unit_named(name))
    }

    pub fn units(self, encoded: &str) -> Self {
        let units = DEFAULT_UNITS_CODER.decode(encoded).unwrap();
        self.map(|d| d.with_units(units))
    }

    /// Render and return the phrase
    pub fn rendered(&self) -> String {
        self.durafmt().to_string()
    }

    /// Assert the rendered phrase
    pub fn renders(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.rendered(), expected, "input: {}", self.input);
        self
    }

    /// Assert that parsing failed with an unrecognized-syntax error
    pub fn rejected(self) {
        match &self.parsed {
            Err(Error::Parse(_)) => {}
            Err(e) => panic!("{:?}: expected a parse error, got {}", self.input, e),
            Ok(d) => panic!("{:?}: expected a parse error, rendered {:?}", self.input, d.to_string()),
        }
    }
}
