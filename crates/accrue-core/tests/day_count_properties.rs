//! Property-based tests for the entry-to-balance-date day count.
//!
//! - Same day counts as one day
//! - Forward ranges are positive, reversed ranges are negative
//! - Reversing a range mirrors the count around the inclusive day

use accrue_core::daycounts::{days_between, ActualInclusive, DayCount, DAYS_PER_YEAR};
use accrue_core::types::Date;
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = Date> {
    // 1990-01-01 plus up to ~60 years
    (0i64..22_000).prop_map(|offset| Date::from_ymd(1990, 1, 1).unwrap().add_days(offset))
}

proptest! {
    #[test]
    fn same_day_is_one(d in date_strategy()) {
        prop_assert_eq!(days_between(d, d), 1);
    }

    #[test]
    fn forward_positive_reverse_negative(d in date_strategy(), gap in 2i64..10_000) {
        let later = d.add_days(gap);
        prop_assert!(days_between(d, later) > 0);
        prop_assert!(days_between(later, d) < 0);
    }

    #[test]
    fn reverse_mirrors_with_inclusive_day(a in date_strategy(), b in date_strategy()) {
        prop_assert_eq!(days_between(a, b) + days_between(b, a), 2);
    }

    #[test]
    fn matches_calendar_difference(d in date_strategy(), gap in -5_000i64..5_000) {
        prop_assert_eq!(days_between(d, d.add_days(gap)), gap + 1);
    }

    #[test]
    fn year_fraction_uses_quarter_day_year(a in date_strategy(), b in date_strategy()) {
        let dc = ActualInclusive;
        let expected = dc.day_count(a, b) as f64 / DAYS_PER_YEAR;
        prop_assert!((dc.year_fraction(a, b) - expected).abs() < 1e-12);
    }
}

#[test]
fn literal_dates_both_directions() {
    let d1 = Date::from_ymd(2023, 1, 1).unwrap();
    let d2 = Date::from_ymd(2023, 6, 1).unwrap();
    assert_eq!(days_between(d1, d2), 152);
    assert_eq!(days_between(d2, d1), -150);
}
