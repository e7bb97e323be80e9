//! Stay types for tracking room reservations.
//!
//! A stay is a guest's requested occupancy of one room over an inclusive
//! date range. It is created without a room, gains one atomically during
//! allocation, and is removed entirely on cancellation.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::room::Room;

/// The store-assigned identifier of a persisted stay.
///
/// A stay has no id until its first save; the store assigns one and the
/// library never invents ids itself.
///
/// # Examples
///
/// ```
/// use vacancy::StayId;
///
/// let id = StayId::new(42);
/// assert_eq!(id.value(), 42);
/// assert_eq!(format!("{id}"), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StayId(i64);

impl StayId {
    /// Creates a stay id from its raw value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for StayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A room reservation for one guest over an inclusive date range.
///
/// Guest contact fields are opaque strings: they are trimmed but not
/// semantically validated. The date window is validated against the
/// calendar rules at build time.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use vacancy::Stay;
///
/// let arrival = NaiveDate::from_ymd_opt(2020, 10, 1).unwrap();
/// let departure = NaiveDate::from_ymd_opt(2020, 10, 3).unwrap();
///
/// let stay = Stay::builder(arrival, departure)
///     .first_name("Ada")
///     .last_name("Lovelace")
///     .email("ada@example.com")
///     .build()
///     .unwrap();
///
/// assert_eq!(stay.arrival_date(), arrival);
/// assert!(stay.room().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stay {
    id: Option<StayId>,
    first_name: String,
    last_name: String,
    email: String,
    arrival_date: NaiveDate,
    departure_date: NaiveDate,
    room: Option<Room>,
}

impl Stay {
    /// Creates a new stay builder for the given date window.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use vacancy::Stay;
    ///
    /// let arrival = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
    /// let stay = Stay::builder(arrival, arrival).build().unwrap();
    /// assert_eq!(stay.departure_date(), arrival);
    /// ```
    #[must_use]
    pub fn builder(arrival_date: NaiveDate, departure_date: NaiveDate) -> StayBuilder {
        StayBuilder {
            arrival_date,
            departure_date,
            first_name: None,
            last_name: None,
            email: None,
        }
    }

    /// Returns the store-assigned id, if this stay has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<StayId> {
        self.id
    }

    /// Returns the guest's first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the guest's last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the guest's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the arrival date.
    #[must_use]
    pub const fn arrival_date(&self) -> NaiveDate {
        self.arrival_date
    }

    /// Returns the departure date.
    #[must_use]
    pub const fn departure_date(&self) -> NaiveDate {
        self.departure_date
    }

    /// Returns the assigned room, if allocation has succeeded.
    #[must_use]
    pub const fn room(&self) -> Option<Room> {
        self.room
    }

    pub(crate) fn set_id(&mut self, id: StayId) {
        self.id = Some(id);
    }

    pub(crate) fn clear_id(&mut self) {
        self.id = None;
    }

    pub(crate) fn assign_room(&mut self, room: Room) {
        self.room = Some(room);
    }

    pub(crate) fn clear_room(&mut self) {
        self.room = None;
    }
}

/// Builder for creating [`Stay`] instances.
///
/// Guest fields default to empty strings; whitespace is trimmed. The date
/// window is checked against the calendar rules when `build` is called.
#[derive(Debug)]
pub struct StayBuilder {
    arrival_date: NaiveDate,
    departure_date: NaiveDate,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
}

impl StayBuilder {
    /// Sets the guest's first name.
    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Sets the guest's last name.
    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Sets the guest's email address.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Builds the stay.
    ///
    /// # Errors
    ///
    /// Returns an error if the date window violates the calendar rules:
    /// departure before arrival, or a stay longer than the maximum length.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use vacancy::Stay;
    ///
    /// let arrival = NaiveDate::from_ymd_opt(2021, 6, 4).unwrap();
    /// let departure = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
    ///
    /// // Departure precedes arrival
    /// assert!(Stay::builder(arrival, departure).build().is_err());
    /// ```
    pub fn build(self) -> Result<Stay, ValidationError> {
        calendar::validate_stay(self.arrival_date, self.departure_date)?;

        let trim = |value: Option<String>| value.map(|v| v.trim().to_string()).unwrap_or_default();

        Ok(Stay {
            id: None,
            first_name: trim(self.first_name),
            last_name: trim(self.last_name),
            email: trim(self.email),
            arrival_date: self.arrival_date,
            departure_date: self.departure_date,
            room: None,
        })
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
