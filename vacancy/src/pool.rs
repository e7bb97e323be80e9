//! The fixed room pool and its per-room lock table.
//!
//! The pool is built once at startup from the configured room count and is
//! immutable afterwards. Each room carries exactly one mutex for its whole
//! lifetime; claiming a room during allocation means holding that mutex
//! across re-validation and persistence. All acquisitions are non-blocking:
//! a busy room is skipped, never waited on.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::room::Room;

/// The fixed set of rooms `1..=total` plus one lock per room.
///
/// Membership never changes after construction. The pool owns the lock
/// table explicitly rather than exposing it as global state; callers pass
/// the pool by reference wherever allocation happens.
///
/// # Examples
///
/// ```
/// use vacancy::RoomPool;
///
/// let pool = RoomPool::new(3).unwrap();
/// assert_eq!(pool.total(), 3);
///
/// // An empty pool is rejected
/// assert!(RoomPool::new(0).is_err());
/// ```
#[derive(Debug)]
pub struct RoomPool {
    rooms: BTreeSet<Room>,
    locks: HashMap<Room, Mutex<()>>,
}

impl RoomPool {
    /// Creates a pool of rooms numbered `1..=total_rooms`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `total_rooms` is zero.
    pub fn new(total_rooms: u16) -> Result<Self> {
        if total_rooms == 0 {
            return Err(Error::Validation {
                field: "total_rooms".into(),
                message: "the pool must contain at least one room".into(),
            });
        }

        let mut rooms = BTreeSet::new();
        let mut locks = HashMap::with_capacity(usize::from(total_rooms));
        for number in 1..=total_rooms {
            // Numbers start at 1, so the conversion cannot fail.
            if let Ok(room) = Room::try_from(number) {
                rooms.insert(room);
                locks.insert(room, Mutex::new(()));
            }
        }

        Ok(Self { rooms, locks })
    }

    /// Returns the set of all rooms in the pool, ascending by number.
    #[must_use]
    pub const fn rooms(&self) -> &BTreeSet<Room> {
        &self.rooms
    }

    /// Returns the number of rooms in the pool.
    #[must_use]
    pub fn total(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if the pool contains the given room.
    #[must_use]
    pub fn contains(&self, room: Room) -> bool {
        self.rooms.contains(&room)
    }

    /// Attempts a non-blocking claim of the given room's lock.
    ///
    /// Returns `None` when the room is not in the pool, when another caller
    /// currently holds the lock, or when the lock is poisoned (a previous
    /// holder panicked mid-claim; the room is then unavailable for the rest
    /// of the process). The caller must hold the returned guard for the
    /// whole critical section: re-validation, assignment, and persistence.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacancy::{Room, RoomPool};
    ///
    /// let pool = RoomPool::new(2).unwrap();
    /// let room = Room::try_from(1).unwrap();
    ///
    /// let claim = pool.try_claim(room).unwrap();
    /// // A second claim of the same room fails while the first is held
    /// assert!(pool.try_claim(room).is_none());
    /// drop(claim);
    /// assert!(pool.try_claim(room).is_some());
    /// ```
    #[must_use]
    pub fn try_claim(&self, room: Room) -> Option<RoomClaim<'_>> {
        let lock = self.locks.get(&room)?;
        match lock.try_lock() {
            Ok(guard) => Some(RoomClaim {
                room,
                _guard: guard,
            }),
            Err(_) => None,
        }
    }
}

/// An exclusive, non-blocking claim on one room's lock.
///
/// Dropping the claim releases the lock. The claim carries no allocation
/// semantics by itself; it only guarantees that no concurrent caller can
/// validate-and-persist against the same room while it is held.
#[derive(Debug)]
pub struct RoomClaim<'a> {
    room: Room,
    _guard: MutexGuard<'a, ()>,
}

impl RoomClaim<'_> {
    /// Returns the room this claim holds.
    #[must_use]
    pub const fn room(&self) -> Room {
        self.room
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn room(n: u16) -> Room {
        Room::try_from(n).unwrap()
    }

    #[test]
    fn test_pool_membership() {
        let pool = RoomPool::new(4).unwrap();
        assert_eq!(pool.total(), 4);
        assert!(pool.contains(room(1)));
        assert!(pool.contains(room(4)));
        assert!(!pool.contains(room(5)));
    }

    #[test]
    fn test_pool_rooms_ascending() {
        let pool = RoomPool::new(3).unwrap();
        let numbers: Vec<u16> = pool.rooms().iter().map(|r| r.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_pool_rejected() {
        let err = RoomPool::new(0).unwrap_err();
        assert!(format!("{err}").contains("at least one room"));
    }

    #[test]
    fn test_try_claim_unknown_room() {
        let pool = RoomPool::new(2).unwrap();
        assert!(pool.try_claim(room(9)).is_none());
    }

    #[test]
    fn test_try_claim_is_exclusive() {
        let pool = RoomPool::new(2).unwrap();

        let first = pool.try_claim(room(1)).unwrap();
        assert_eq!(first.room(), room(1));

        // Same room is busy; a different room is not
        assert!(pool.try_claim(room(1)).is_none());
        assert!(pool.try_claim(room(2)).is_some());

        drop(first);
        assert!(pool.try_claim(room(1)).is_some());
    }

    #[test]
    fn test_try_claim_across_threads() {
        let pool = Arc::new(RoomPool::new(1).unwrap());
        let claim = pool.try_claim(room(1)).unwrap();

        let contender = Arc::clone(&pool);
        let handle = thread::spawn(move || contender.try_claim(room(1)).is_none());
        assert!(handle.join().unwrap());

        drop(claim);
        let contender = Arc::clone(&pool);
        let handle = thread::spawn(move || contender.try_claim(room(1)).is_some());
        assert!(handle.join().unwrap());
    }
}
