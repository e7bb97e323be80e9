//! Integration tests for the availability calendar.
//!
//! These tests exercise the calendar through the frontdesk against a real
//! database file, verifying the per-day counts, window normalization, and
//! the restartable-iteration guarantee.

mod common;

use common::{create_test_database, date, request};
use vacancy::{Availability, Frontdesk};

#[test]
fn test_counts_over_a_booked_window() {
    // Pool of two rooms, three stays:
    //   A: 10-01 to 10-03 (room 1)
    //   B: 10-01 to 10-02 (room 2)
    //   C: 10-05 to 10-06 (room 1, freed by A's checkout)
    let frontdesk = Frontdesk::new(2).unwrap();
    let (_dir, mut db) = create_test_database();

    frontdesk
        .create(&mut db, &request(date(2020, 10, 1), date(2020, 10, 3)))
        .unwrap();
    frontdesk
        .create(&mut db, &request(date(2020, 10, 1), date(2020, 10, 2)))
        .unwrap();
    frontdesk
        .create(&mut db, &request(date(2020, 10, 5), date(2020, 10, 6)))
        .unwrap();

    let records: Vec<Availability> = frontdesk
        .availabilities(&db, Some(date(2020, 10, 1)), Some(date(2020, 10, 8)))
        .unwrap()
        .collect();

    let expected: Vec<(u32, usize)> = vec![
        (1, 0),
        (2, 0),
        (3, 1),
        (4, 2),
        (5, 1),
        (6, 1),
        (7, 2),
        (8, 2),
    ];
    assert_eq!(records.len(), expected.len());
    for (record, (day, free)) in records.iter().zip(expected) {
        assert_eq!(record.date, date(2020, 10, day));
        assert_eq!(record.free_rooms, free, "wrong count on day {day}");
    }
}

#[test]
fn test_one_record_per_day_no_gaps() {
    let frontdesk = Frontdesk::new(1).unwrap();
    let (_dir, db) = create_test_database();

    let dates: Vec<_> = frontdesk
        .availabilities(&db, Some(date(2020, 2, 27)), Some(date(2020, 3, 2)))
        .unwrap()
        .map(|a| a.date)
        .collect();

    // Leap year: February has a 29th
    assert_eq!(
        dates,
        vec![
            date(2020, 2, 27),
            date(2020, 2, 28),
            date(2020, 2, 29),
            date(2020, 3, 1),
            date(2020, 3, 2),
        ]
    );
}

#[test]
fn test_iteration_is_restartable() {
    let frontdesk = Frontdesk::new(2).unwrap();
    let (_dir, mut db) = create_test_database();

    frontdesk
        .create(&mut db, &request(date(2020, 10, 2), date(2020, 10, 3)))
        .unwrap();

    let calendar = frontdesk
        .availabilities(&db, Some(date(2020, 10, 1)), Some(date(2020, 10, 5)))
        .unwrap();

    // A partially consumed clone leaves the original untouched
    let mut partial = calendar.clone();
    partial.next();
    partial.next();

    let first: Vec<Availability> = calendar.clone().collect();
    let second: Vec<Availability> = calendar.collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 5);
}

#[test]
fn test_iteration_does_not_requery_the_store() {
    let frontdesk = Frontdesk::new(2).unwrap();
    let (_dir, mut db) = create_test_database();

    let calendar = frontdesk
        .availabilities(&db, Some(date(2020, 10, 1)), Some(date(2020, 10, 3)))
        .unwrap();

    // Booked after the calendar was built: the snapshot must not see it
    frontdesk
        .create(&mut db, &request(date(2020, 10, 1), date(2020, 10, 2)))
        .unwrap();

    assert!(calendar.into_iter().all(|a| a.free_rooms == 2));
}

#[test]
fn test_missing_end_yields_31_days() {
    let frontdesk = Frontdesk::new(1).unwrap();
    let (_dir, db) = create_test_database();

    let records: Vec<Availability> = frontdesk
        .availabilities(&db, Some(date(2020, 10, 1)), None)
        .unwrap()
        .collect();
    assert_eq!(records.len(), 31);
    assert_eq!(records.first().unwrap().date, date(2020, 10, 1));
    assert_eq!(records.last().unwrap().date, date(2020, 10, 31));
}

#[test]
fn test_end_before_start_yields_31_days() {
    let frontdesk = Frontdesk::new(1).unwrap();
    let (_dir, db) = create_test_database();

    let count = frontdesk
        .availabilities(&db, Some(date(2020, 10, 15)), Some(date(2020, 10, 1)))
        .unwrap()
        .count();
    assert_eq!(count, 31);
}

#[test]
fn test_default_window_starts_near_today() {
    let frontdesk = Frontdesk::new(1).unwrap();
    let (_dir, db) = create_test_database();

    let records: Vec<Availability> = frontdesk.availabilities(&db, None, None).unwrap().collect();
    assert_eq!(records.len(), 31);

    let today = chrono::Local::now().date_naive();
    assert_eq!(records[0].date, today - chrono::Days::new(2));
}
