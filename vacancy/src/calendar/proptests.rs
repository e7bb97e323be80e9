//! Property-based tests for the calendar rules.
//!
//! Run with: `cargo test --features property-tests`

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use super::{day_occupied_by, strictly_narrows, validate_stay, windows_share_day};
use crate::stay::Stay;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    // A generous but finite range keeps date arithmetic in bounds
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    /// A window is accepted exactly when departure is within
    /// `arrival..=arrival + 2`.
    #[test]
    fn validate_accepts_iff_window_in_bounds(
        arrival in arb_date(),
        offset in -5i64..10,
    ) {
        let departure = if offset >= 0 {
            arrival + Days::new(offset.unsigned_abs())
        } else {
            arrival - Days::new(offset.unsigned_abs())
        };

        let expected = (0..=2).contains(&offset);
        prop_assert_eq!(validate_stay(arrival, departure).is_ok(), expected);
    }

    /// Occupancy of a day is equivalent to the inclusive range check
    /// `arrival <= day <= departure`.
    #[test]
    fn day_occupied_matches_inclusive_range(
        arrival in arb_date(),
        length in 0u64..=2,
        probe_offset in -4i64..8,
    ) {
        let departure = arrival + Days::new(length);
        let stay = Stay::builder(arrival, departure).build().unwrap();

        let day = if probe_offset >= 0 {
            arrival + Days::new(probe_offset.unsigned_abs())
        } else {
            arrival - Days::new(probe_offset.unsigned_abs())
        };

        let expected = arrival <= day && day <= departure;
        prop_assert_eq!(day_occupied_by(day, &stay), expected);
    }

    /// Window overlap is symmetric and agrees with a brute-force scan of
    /// the days in the first window.
    #[test]
    fn windows_share_day_matches_day_scan(
        a_arrival in arb_date(),
        a_length in 0u64..=2,
        b_offset in -6i64..8,
        b_length in 0u64..=2,
    ) {
        let a_departure = a_arrival + Days::new(a_length);
        let b_arrival = if b_offset >= 0 {
            a_arrival + Days::new(b_offset.unsigned_abs())
        } else {
            a_arrival - Days::new(b_offset.unsigned_abs())
        };
        let b_departure = b_arrival + Days::new(b_length);

        let b_stay = Stay::builder(b_arrival, b_departure).build().unwrap();
        let mut scanned = false;
        let mut day = a_arrival;
        while day <= a_departure {
            if day_occupied_by(day, &b_stay) {
                scanned = true;
            }
            day = day.succ_opt().unwrap();
        }

        let shared = windows_share_day(a_arrival, a_departure, b_arrival, b_departure);
        prop_assert_eq!(shared, scanned);
        prop_assert_eq!(
            shared,
            windows_share_day(b_arrival, b_departure, a_arrival, a_departure)
        );
    }

    /// A strict narrowing always stays inside the old window and always
    /// shares a day with it.
    #[test]
    fn narrowing_implies_containment(
        old_arrival in arb_date(),
        old_length in 0u64..=2,
        new_start_offset in 0u64..=2,
        new_length in 0u64..=2,
    ) {
        let old_departure = old_arrival + Days::new(old_length);
        let new_arrival = old_arrival + Days::new(new_start_offset);
        let new_departure = new_arrival + Days::new(new_length);

        if strictly_narrows(new_arrival, new_departure, old_arrival, old_departure) {
            prop_assert!(new_arrival >= old_arrival);
            prop_assert!(new_departure <= old_departure);
            prop_assert!((new_arrival, new_departure) != (old_arrival, old_departure));
            prop_assert!(windows_share_day(
                new_arrival,
                new_departure,
                old_arrival,
                old_departure
            ));
        }
    }
}
