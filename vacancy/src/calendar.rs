//! Calendar rules for stay windows and day occupancy.
//!
//! Pure functions only: no state, no I/O. These rules define the occupancy
//! convention used by every other component: a room is unavailable on both
//! its check-in and checkout day (no same-day turnover).

use chrono::{Days, NaiveDate};

use crate::stay::{Stay, ValidationError};

/// Maximum number of occupied days a single stay may span, inclusive of
/// both the arrival and departure day.
///
/// A window is valid when `arrival + MAX_STAY_DAYS` is strictly after
/// `departure`, so the longest stay is `arrival..=arrival + 2`.
///
/// The original system's test fixtures also mention a booking-advance
/// window (at least 1, at most 30 days ahead of the arrival date), but its
/// validation never enforced it; it is not enforced here either and would
/// slot into [`validate_stay`] if ever required.
pub const MAX_STAY_DAYS: u64 = 3;

/// Validates a stay window against the calendar rules.
///
/// # Errors
///
/// Returns a validation error if `departure` precedes `arrival`, or if the
/// window spans more than [`MAX_STAY_DAYS`] occupied days.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use vacancy::calendar::validate_stay;
///
/// let arrival = NaiveDate::from_ymd_opt(2020, 10, 1).unwrap();
/// let departure = NaiveDate::from_ymd_opt(2020, 10, 3).unwrap();
/// assert!(validate_stay(arrival, departure).is_ok());
///
/// let too_long = NaiveDate::from_ymd_opt(2020, 10, 4).unwrap();
/// assert!(validate_stay(arrival, too_long).is_err());
/// ```
pub fn validate_stay(arrival: NaiveDate, departure: NaiveDate) -> Result<(), ValidationError> {
    if departure < arrival {
        return Err(ValidationError {
            field: "departure_date".into(),
            message: "departure must be same day or later than arrival".into(),
        });
    }

    match arrival.checked_add_days(Days::new(MAX_STAY_DAYS)) {
        // The window is valid only while arrival + MAX_STAY_DAYS stays
        // strictly after departure.
        Some(limit) if limit <= departure => Err(ValidationError {
            field: "departure_date".into(),
            message: "maximum allowed stay is 3 days".into(),
        }),
        _ => Ok(()),
    }
}

/// Returns `true` if the given day is occupied by the given stay.
///
/// Both endpoints count: a room is unavailable on its check-in day and on
/// its checkout day.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use vacancy::calendar::day_occupied_by;
/// use vacancy::Stay;
///
/// let arrival = NaiveDate::from_ymd_opt(2020, 10, 1).unwrap();
/// let departure = NaiveDate::from_ymd_opt(2020, 10, 3).unwrap();
/// let stay = Stay::builder(arrival, departure).build().unwrap();
///
/// assert!(day_occupied_by(arrival, &stay));
/// assert!(day_occupied_by(departure, &stay));
/// assert!(!day_occupied_by(departure.succ_opt().unwrap(), &stay));
/// ```
#[must_use]
pub fn day_occupied_by(day: NaiveDate, stay: &Stay) -> bool {
    stay.arrival_date() <= day && day <= stay.departure_date()
}

/// Returns `true` if two inclusive date windows share at least one
/// occupied day.
///
/// Used to decide whether an updated stay still overlaps its own prior
/// window, in which case the prior record must be discounted from the
/// conflict count.
#[must_use]
pub fn windows_share_day(
    first_arrival: NaiveDate,
    first_departure: NaiveDate,
    second_arrival: NaiveDate,
    second_departure: NaiveDate,
) -> bool {
    first_arrival <= second_departure && second_arrival <= first_departure
}

/// Returns `true` if the new window strictly narrows the old one.
///
/// A narrowing keeps one endpoint and pulls the other inward, or pulls
/// both endpoints inward. The room assigned for the old window remains
/// valid by construction, so no reallocation is needed.
#[must_use]
pub fn strictly_narrows(
    new_arrival: NaiveDate,
    new_departure: NaiveDate,
    old_arrival: NaiveDate,
    old_departure: NaiveDate,
) -> bool {
    (new_arrival == old_arrival && new_departure < old_departure)
        || (new_departure == old_departure && new_arrival > old_arrival)
        || (new_arrival > old_arrival && new_departure < old_departure)
}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
