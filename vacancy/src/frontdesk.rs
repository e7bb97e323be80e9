//! The reservation façade.
//!
//! `Frontdesk` owns the room pool and wires validation, conflict
//! discovery, the capacity check, and the allocator into the operations
//! callers actually invoke. Store handles are passed per call so several
//! threads can share one frontdesk while each holds its own connection.

use chrono::{Days, NaiveDate};

use crate::allocator::{self, ClaimOutcome};
use crate::availability::AvailabilityCalendar;
use crate::calendar;
use crate::config::{Config, DEFAULT_TOTAL_ROOMS};
use crate::conflicts;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::pool::RoomPool;
use crate::stay::{Stay, StayId};

/// Entry point for reservation operations against one room pool.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tempfile::tempdir;
/// use vacancy::database::{Database, DatabaseConfig};
/// use vacancy::{Frontdesk, Stay};
///
/// let frontdesk = Frontdesk::new(2).unwrap();
/// let dir = tempdir().unwrap();
/// let mut db = Database::open(DatabaseConfig::new(dir.path().join("vacancy.db"))).unwrap();
///
/// let arrival = NaiveDate::from_ymd_opt(2021, 7, 1).unwrap();
/// let request = Stay::builder(arrival, arrival)
///     .first_name("Ada")
///     .build()
///     .unwrap();
///
/// let booked = frontdesk.create(&mut db, &request).unwrap();
/// assert!(booked.id().is_some());
/// assert!(booked.room().is_some());
/// ```
#[derive(Debug)]
pub struct Frontdesk {
    pool: RoomPool,
}

impl Frontdesk {
    /// Creates a frontdesk over a pool of `total_rooms` rooms.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `total_rooms` is zero.
    pub fn new(total_rooms: u16) -> Result<Self> {
        Ok(Self {
            pool: RoomPool::new(total_rooms)?,
        })
    }

    /// Creates a frontdesk sized by the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configured room count is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.total_rooms.unwrap_or(DEFAULT_TOTAL_ROOMS))
    }

    /// Returns the room pool.
    #[must_use]
    pub const fn pool(&self) -> &RoomPool {
        &self.pool
    }

    /// Books a new stay, assigning the first free room that survives its
    /// re-check.
    ///
    /// Any id or room on the request is ignored; the store assigns the id
    /// and the allocator assigns the room.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid window,
    /// [`Error::NoAvailability`] when the pool is already full for the
    /// window, or [`Error::AllocationExhausted`] when every candidate room
    /// was claimed concurrently.
    pub fn create(&self, db: &mut Database, request: &Stay) -> Result<Stay> {
        calendar::validate_stay(request.arrival_date(), request.departure_date())?;

        let mut pending = request.clone();
        pending.clear_id();
        pending.clear_room();

        let conflicts = conflicts::conflicts_for(
            db,
            pending.arrival_date(),
            pending.departure_date(),
            None,
        )?;
        let candidates = conflicts::free_rooms(&self.pool, conflicts, None, false)?;

        match allocator::claim(&self.pool, db, &candidates, &pending, None)? {
            ClaimOutcome::Assigned(stay) => Ok(stay),
            ClaimOutcome::Exhausted => Err(Error::AllocationExhausted {
                arrival: pending.arrival_date(),
                departure: pending.departure_date(),
            }),
        }
    }

    /// Rewrites the stay named by `id` with the request's guest fields and
    /// window.
    ///
    /// A strict narrowing of the old window keeps the old room and
    /// persists directly. Any other change goes through conflict
    /// discovery and reallocation; when the new window still shares a day
    /// with the old one, the stay's own record is discounted from the
    /// capacity check and its current room stays a candidate.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid window,
    /// [`Error::NotFound`] when the id does not exist,
    /// [`Error::NoAvailability`] when the pool is full for the new window,
    /// or [`Error::AllocationExhausted`] when every candidate room was
    /// claimed concurrently.
    pub fn update(&self, db: &mut Database, id: StayId, request: &Stay) -> Result<Stay> {
        calendar::validate_stay(request.arrival_date(), request.departure_date())?;

        let old = db
            .find_stay(id)?
            .ok_or_else(|| Error::NotFound {
                resource: format!("stay {id}"),
            })?;

        let mut merged = Stay::builder(request.arrival_date(), request.departure_date())
            .first_name(request.first_name())
            .last_name(request.last_name())
            .email(request.email())
            .build()?;
        merged.set_id(id);

        if calendar::strictly_narrows(
            merged.arrival_date(),
            merged.departure_date(),
            old.arrival_date(),
            old.departure_date(),
        ) {
            // The old room covers a superset of the new window
            if let Some(room) = old.room() {
                merged.assign_room(room);
            }
            return db.save_stay(&merged);
        }

        let overlaps_prior = calendar::windows_share_day(
            merged.arrival_date(),
            merged.departure_date(),
            old.arrival_date(),
            old.departure_date(),
        );

        let conflicts = conflicts::conflicts_for(
            db,
            merged.arrival_date(),
            merged.departure_date(),
            None,
        )?;
        let candidates = conflicts::free_rooms(&self.pool, conflicts, Some(id), overlaps_prior)?;

        match allocator::claim(&self.pool, db, &candidates, &merged, Some(id))? {
            ClaimOutcome::Assigned(stay) => Ok(stay),
            ClaimOutcome::Exhausted => Err(Error::AllocationExhausted {
                arrival: merged.arrival_date(),
                departure: merged.departure_date(),
            }),
        }
    }

    /// Cancels the stay named by `id`.
    ///
    /// Cancellation is idempotent: an unknown id is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the store delete fails.
    pub fn delete(&self, db: &Database, id: StayId) -> Result<()> {
        db.delete_stay(id)
    }

    /// Fetches the stay named by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when the id does not exist.
    pub fn get(&self, db: &Database, id: StayId) -> Result<Stay> {
        db.find_stay(id)?.ok_or_else(|| Error::NotFound {
            resource: format!("stay {id}"),
        })
    }

    /// Lists the stays that could touch the inclusive window
    /// `[start, end]`, ascending by arrival date.
    ///
    /// Arrivals from one day before the window are included, matching the
    /// range the availability endpoints were built on.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub fn stays_in_range(
        &self,
        db: &Database,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Stay>> {
        db.stays_with_arrival_between(start - Days::new(1), end)
    }

    /// Builds the per-day availability calendar for the given window.
    ///
    /// Absent bounds are normalized as described on
    /// [`AvailabilityCalendar`].
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub fn availabilities(
        &self,
        db: &Database,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<AvailabilityCalendar> {
        AvailabilityCalendar::new(&self.pool, db, start, end)
    }
}
