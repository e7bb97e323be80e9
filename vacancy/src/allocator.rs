//! Race-safe assignment of a candidate room to a stay.
//!
//! The bulk conflict query runs without any lock, so by the time a caller
//! tries to take a room another caller may already have it. The allocator
//! closes that window per room: claim the room's lock without blocking,
//! re-check the single room against the store, and persist while the lock
//! is still held. Rooms that are busy or fail the re-check are skipped,
//! never waited on.

use std::collections::BTreeSet;

use crate::conflicts;
use crate::database::Database;
use crate::error::Result;
use crate::pool::RoomPool;
use crate::room::Room;
use crate::stay::{Stay, StayId};

/// The result of walking the candidate rooms.
///
/// `Exhausted` is an ordinary outcome, not an error: every candidate was
/// either locked by a concurrent caller or taken between the bulk query
/// and the claim. Callers decide how to surface it.
#[derive(Debug)]
pub enum ClaimOutcome {
    /// A room was claimed and the stay persisted with it.
    Assigned(Stay),
    /// Every candidate room was busy or no longer free.
    Exhausted,
}

/// Walks the candidate rooms in ascending order and persists the stay
/// under the first room that survives its re-check.
///
/// `excluding` names the stay's own prior record during an update so the
/// re-check does not count it as a conflict.
///
/// # Errors
///
/// Returns an error if a store query or the persist fails. A fully
/// contended pool is reported as [`ClaimOutcome::Exhausted`], not as an
/// error.
pub fn claim(
    pool: &RoomPool,
    db: &mut Database,
    candidates: &BTreeSet<Room>,
    stay: &Stay,
    excluding: Option<StayId>,
) -> Result<ClaimOutcome> {
    for &room in candidates {
        let Some(held) = pool.try_claim(room) else {
            continue;
        };

        if !conflicts::room_is_free(
            db,
            stay.arrival_date(),
            stay.departure_date(),
            room,
            excluding,
        )? {
            continue;
        }

        let mut assigned = stay.clone();
        assigned.assign_room(held.room());
        let persisted = db.save_stay(&assigned)?;
        return Ok(ClaimOutcome::Assigned(persisted));
    }

    Ok(ClaimOutcome::Exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::create_test_database;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn room(n: u16) -> Room {
        Room::try_from(n).unwrap()
    }

    fn pending_stay() -> Stay {
        Stay::builder(date(2020, 10, 1), date(2020, 10, 2))
            .first_name("Ada")
            .build()
            .unwrap()
    }

    #[test]
    fn test_claim_takes_first_candidate() {
        let mut db = create_test_database();
        let pool = RoomPool::new(3).unwrap();
        let candidates = pool.rooms().clone();

        let outcome = claim(&pool, &mut db, &candidates, &pending_stay(), None).unwrap();
        match outcome {
            ClaimOutcome::Assigned(persisted) => {
                assert_eq!(persisted.room(), Some(room(1)));
                assert!(persisted.id().is_some());
                // Persisted under the lock, visible afterwards
                let found = db.find_stay(persisted.id().unwrap()).unwrap().unwrap();
                assert_eq!(found.room(), Some(room(1)));
            }
            ClaimOutcome::Exhausted => panic!("expected an assignment"),
        }
    }

    #[test]
    fn test_claim_skips_locked_room() {
        let mut db = create_test_database();
        let pool = RoomPool::new(2).unwrap();
        let candidates = pool.rooms().clone();

        let held = pool.try_claim(room(1)).unwrap();
        let outcome = claim(&pool, &mut db, &candidates, &pending_stay(), None).unwrap();
        drop(held);

        match outcome {
            ClaimOutcome::Assigned(persisted) => assert_eq!(persisted.room(), Some(room(2))),
            ClaimOutcome::Exhausted => panic!("expected an assignment"),
        }
    }

    #[test]
    fn test_claim_skips_room_taken_since_bulk_query() {
        let mut db = create_test_database();
        let pool = RoomPool::new(2).unwrap();
        let candidates = pool.rooms().clone();

        // Candidate list is stale: room 1 was persisted after the bulk query
        let mut winner = pending_stay();
        winner.assign_room(room(1));
        db.save_stay(&winner).unwrap();

        let outcome = claim(&pool, &mut db, &candidates, &pending_stay(), None).unwrap();
        match outcome {
            ClaimOutcome::Assigned(persisted) => assert_eq!(persisted.room(), Some(room(2))),
            ClaimOutcome::Exhausted => panic!("expected an assignment"),
        }
    }

    #[test]
    fn test_claim_exhausted_when_all_candidates_lost() {
        let mut db = create_test_database();
        let pool = RoomPool::new(2).unwrap();
        let candidates = pool.rooms().clone();

        let lock_one = pool.try_claim(room(1)).unwrap();
        let lock_two = pool.try_claim(room(2)).unwrap();

        let outcome = claim(&pool, &mut db, &candidates, &pending_stay(), None).unwrap();
        drop(lock_one);
        drop(lock_two);

        assert!(matches!(outcome, ClaimOutcome::Exhausted));
    }

    #[test]
    fn test_claim_excluding_own_record_reuses_room() {
        let mut db = create_test_database();
        let pool = RoomPool::new(1).unwrap();
        let candidates = pool.rooms().clone();

        let mut prior = pending_stay();
        prior.assign_room(room(1));
        let prior = db.save_stay(&prior).unwrap();

        // Same window, only candidate is the room held by the prior record
        let outcome = claim(&pool, &mut db, &candidates, &pending_stay(), prior.id()).unwrap();
        match outcome {
            ClaimOutcome::Assigned(persisted) => assert_eq!(persisted.room(), Some(room(1))),
            ClaimOutcome::Exhausted => panic!("expected an assignment"),
        }
    }
}
