//! Error types for the vacancy library.
//!
//! This module provides the error hierarchy for all operations in the
//! vacancy library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a vacancy error.
///
/// # Examples
///
/// ```
/// use vacancy::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the vacancy library.
///
/// This enum encompasses all possible error conditions that can occur
/// during reservation and allocation operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A stay window or field violates the calendar rules.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The pool is exhausted for the requested window.
    #[error("no rooms available: {details}")]
    NoAvailability {
        /// Details about the exhausted window.
        details: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// Every candidate room lost its race during allocation.
    ///
    /// Distinct from [`Error::NoAvailability`]: the bulk free-room check
    /// found candidates, but each one was claimed by a concurrent caller
    /// before this one could take it.
    #[error("allocation exhausted for {arrival} to {departure}: every candidate room was claimed concurrently")]
    AllocationExhausted {
        /// Arrival date of the stay that could not be allocated.
        arrival: chrono::NaiveDate,
        /// Departure date of the stay that could not be allocated.
        departure: chrono::NaiveDate,
    },

    /// An invalid room number was provided.
    #[error("invalid room {value}: {reason}")]
    InvalidRoom {
        /// The invalid room value.
        value: u16,
        /// The reason the room is invalid.
        reason: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

// Additional conversions for better ergonomics

impl From<crate::room::InvalidRoomError> for Error {
    fn from(err: crate::room::InvalidRoomError) -> Self {
        Self::InvalidRoom {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl From<crate::stay::ValidationError> for Error {
    fn from(err: crate::stay::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error indicates the pool is exhausted for a window.
    ///
    /// Covers both the bulk capacity check and the allocator losing every
    /// candidate race; callers wanting to surface a capacity failure treat
    /// the two the same way.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacancy::Error;
    ///
    /// let err = Error::NoAvailability { details: "fully booked".into() };
    /// assert!(err.is_no_availability());
    /// ```
    #[must_use]
    pub fn is_no_availability(&self) -> bool {
        matches!(
            self,
            Self::NoAvailability { .. } | Self::AllocationExhausted { .. }
        )
    }

    /// Check if error indicates a missing record.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacancy::Error;
    ///
    /// let err = Error::NotFound { resource: "stay 7".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
