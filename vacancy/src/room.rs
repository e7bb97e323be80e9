//! The room identifier type.
//!
//! Rooms are fungible units of a fixed pool, identified by a small positive
//! integer. Validation lives here; the pool and its lock table live in
//! [`crate::pool`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// A valid room number (1 or greater).
///
/// Room 0 is invalid: the pool is the integer range `1..=total_rooms`, and
/// an unassigned stay is represented by the absence of a room, never by a
/// sentinel value.
///
/// # Examples
///
/// ```
/// use vacancy::Room;
///
/// // Valid room
/// let room = Room::try_from(3).unwrap();
/// assert_eq!(room.number(), 3);
///
/// // Invalid room (0)
/// assert!(Room::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Room(u16);

impl Room {
    /// Returns the underlying room number.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacancy::Room;
    ///
    /// let room = Room::try_from(12).unwrap();
    /// assert_eq!(room.number(), 12);
    /// ```
    #[must_use]
    pub const fn number(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for Room {
    type Error = InvalidRoomError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if value == 0 {
            Err(InvalidRoomError {
                value,
                reason: "room 0 is invalid".into(),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for invalid room numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRoomError {
    /// The invalid room value.
    pub value: u16,
    /// The reason the room is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidRoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid room {}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidRoomError {}
