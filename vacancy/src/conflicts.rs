//! Conflict discovery and the capacity check.
//!
//! A conflict is any persisted stay sharing at least one occupied day with
//! a requested window. Because a stay spans at most three days, only
//! arrivals from `window start - 2` onward can reach into the window, which
//! keeps the store query to one indexed range scan.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};

use crate::database::Database;
use crate::error::{Error, Result};
use crate::pool::RoomPool;
use crate::room::Room;
use crate::stay::{Stay, StayId};

/// Returns the persisted stays that share at least one day with the given
/// window, ascending by arrival date.
///
/// When `excluding` is set, the named stay is dropped from the result; an
/// update uses this to ignore its own prior record.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn conflicts_for(
    db: &Database,
    arrival: NaiveDate,
    departure: NaiveDate,
    excluding: Option<StayId>,
) -> Result<Vec<Stay>> {
    let stays = db.stays_with_arrival_between(arrival - Days::new(2), departure)?;

    Ok(stays
        .into_iter()
        .filter(|stay| stay.departure_date() >= arrival)
        .filter(|stay| excluding.map_or(true, |id| stay.id() != Some(id)))
        .collect())
}

/// Subtracts the rooms held by the given conflicts from the pool, after
/// the capacity short-circuit.
///
/// For a fresh create (`prior` is `None`) or an update whose new window no
/// longer touches its old one, the pool is exhausted when the conflicts
/// already fill every room. For an update that still overlaps its prior
/// window, the prior record is itself among the conflicts: exhaustion is
/// one past the room count, and the prior record is discounted before the
/// subtraction because its room is the updater's own.
///
/// # Errors
///
/// Returns [`Error::NoAvailability`] when the capacity check fails.
pub fn free_rooms(
    pool: &RoomPool,
    mut conflicts: Vec<Stay>,
    prior: Option<StayId>,
    overlaps_prior: bool,
) -> Result<BTreeSet<Room>> {
    let mut available = pool.rooms().clone();
    if conflicts.is_empty() {
        return Ok(available);
    }

    match prior {
        Some(id) if overlaps_prior => {
            if conflicts.len() >= pool.total() + 1 {
                return Err(Error::NoAvailability {
                    details: "no rooms are available to change the reservation for the selected \
                              dates"
                        .into(),
                });
            }
            conflicts.retain(|stay| stay.id() != Some(id));
        }
        _ => {
            if conflicts.len() >= pool.total() {
                return Err(Error::NoAvailability {
                    details: "no rooms are available to make a reservation for the selected dates"
                        .into(),
                });
            }
        }
    }

    for stay in &conflicts {
        if let Some(room) = stay.room() {
            available.remove(&room);
        }
    }
    Ok(available)
}

/// Re-checks a single room against the store.
///
/// Used inside the allocator's critical section, after the room's lock is
/// held, to close the race between the bulk conflict query and the claim.
/// The exclusion removes only the named stay; with no exclusion every
/// conflict row counts.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn room_is_free(
    db: &Database,
    arrival: NaiveDate,
    departure: NaiveDate,
    room: Room,
    excluding: Option<StayId>,
) -> Result<bool> {
    let conflicts = conflicts_for(db, arrival, departure, excluding)?;
    Ok(conflicts.iter().all(|stay| stay.room() != Some(room)))
}
