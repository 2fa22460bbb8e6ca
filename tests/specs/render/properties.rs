//! Properties that hold for every duration

use crate::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn negative_equals_sign_plus_positive(secs in 1i64..(1i64 << 33)) {
        let positive = Durafmt::new(Interval::from_secs(secs)).to_string();
        let negative = Durafmt::new(Interval::from_secs(-secs)).to_string();
        prop_assert_eq!(negative, format!("-{}", positive));
    }

    #[test]
    fn first_n_truncates_from_the_left(micros in 1i64..i64::MAX, n in 1usize..8) {
        let d = Durafmt::new(Interval::from_micros(micros));
        let shorter: Vec<String> = d.limit_first_n(n).to_string().split(' ').map(String::from).collect();
        let longer: Vec<String> = d.limit_first_n(n + 1).to_string().split(' ').map(String::from).collect();
        prop_assert!(longer.starts_with(&shorter));
        prop_assert!(shorter.len() <= 2 * n);
    }

    #[test]
    fn grammar_round_trip(nanos in any::<i64>()) {
        let original = Interval::from_nanos(i128::from(nanos));
        let reparsed = Durafmt::parse(&original.to_grammar_string()).unwrap();
        let direct = Durafmt::new(original);
        prop_assert_eq!(reparsed.interval(), original);
        prop_assert_eq!(reparsed.breakdown(), direct.breakdown());
    }
}
