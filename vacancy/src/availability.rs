//! Per-day availability over a date window.
//!
//! Availability is derived, never stored: the calendar fetches the stays
//! that could touch the window once, then counts free rooms day by day.

use std::collections::BTreeSet;

use chrono::{Days, Local, NaiveDate};
use serde::Serialize;

use crate::calendar;
use crate::database::Database;
use crate::error::Result;
use crate::pool::RoomPool;
use crate::room::Room;
use crate::stay::Stay;

/// The number of free rooms on one calendar day.
///
/// Produced by [`AvailabilityCalendar`]; a count of zero means the day is
/// fully booked, not that the day is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Availability {
    /// The calendar day.
    pub date: NaiveDate,
    /// How many rooms have no stay occupying this day.
    pub free_rooms: usize,
}

/// An ordered, finite iterator of per-day availability records.
///
/// The calendar queries the store exactly once at construction and then
/// answers every day from memory, so iterating never touches the store
/// again. It is `Clone`, which restarts iteration from the first day of
/// the window.
///
/// Window normalization:
/// - an absent start defaults to two days before today;
/// - an absent end, or an end before the start, defaults to thirty days
///   after the start (a 31-day window).
#[derive(Debug, Clone)]
pub struct AvailabilityCalendar {
    rooms: BTreeSet<Room>,
    stays: Vec<Stay>,
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl AvailabilityCalendar {
    /// Builds the calendar for the given window, normalizing absent or
    /// inverted bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub fn new(
        pool: &RoomPool,
        db: &Database,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Self> {
        let first = start.unwrap_or_else(|| Local::now().date_naive() - Days::new(2));
        let last = match end {
            Some(end) if end >= first => end,
            _ => first + Days::new(30),
        };

        // A stay occupies at most 3 days, so only arrivals from two days
        // before the window can still reach into it.
        let stays = db.stays_with_arrival_between(first - Days::new(2), last + Days::new(1))?;

        Ok(Self {
            rooms: pool.rooms().clone(),
            stays,
            next: Some(first),
            last,
        })
    }

    /// Returns the inclusive window this calendar covers.
    #[must_use]
    pub fn window(&self) -> (NaiveDate, NaiveDate) {
        // next is only None after the window is exhausted; the window
        // itself does not change.
        (self.next.unwrap_or(self.last), self.last)
    }

    /// Returns the rooms with no stay occupying the given day.
    ///
    /// Only days inside the fetched window are meaningful; asking about a
    /// day outside it may miss stays the calendar never loaded.
    #[must_use]
    pub fn free_rooms_on(&self, day: NaiveDate) -> BTreeSet<Room> {
        let mut free = self.rooms.clone();
        for stay in &self.stays {
            if calendar::day_occupied_by(day, stay) {
                if let Some(room) = stay.room() {
                    free.remove(&room);
                }
            }
        }
        free
    }
}

impl Iterator for AvailabilityCalendar {
    type Item = Availability;

    fn next(&mut self) -> Option<Self::Item> {
        let day = self.next?;
        if day > self.last {
            self.next = None;
            return None;
        }

        let record = Availability {
            date: day,
            free_rooms: self.free_rooms_on(day).len(),
        };
        self.next = day.succ_opt();
        Some(record)
    }
}
