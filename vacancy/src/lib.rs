#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # vacancy
//!
//! A library for allocating rooms from a fixed pool to guest stays.
//!
//! This library provides core types and functionality for booking,
//! amending, and cancelling stays against a finite set of fungible rooms,
//! and for answering per-day availability over a date window. Allocation
//! is race-safe: a per-room lock table closes the window between the
//! conflict check and the persist, so two concurrent bookings never share
//! a room on an overlapping window.
//!
//! ## Core Types
//!
//! - [`Room`] and [`RoomPool`]: the fixed pool and its per-room locks
//! - [`Stay`] and [`StayId`]: guest stays over inclusive date windows
//! - [`Frontdesk`]: the operations façade (book, amend, cancel, list)
//! - [`AvailabilityCalendar`]: per-day free-room counts
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use vacancy::{Room, Stay};
//!
//! // Create a valid room
//! let room = Room::try_from(3).unwrap();
//! assert_eq!(room.number(), 3);
//!
//! // Build a stay request (three occupied days at most)
//! let arrival = NaiveDate::from_ymd_opt(2021, 7, 1).unwrap();
//! let departure = NaiveDate::from_ymd_opt(2021, 7, 3).unwrap();
//! let stay = Stay::builder(arrival, departure)
//!     .first_name("Ada")
//!     .build()
//!     .unwrap();
//! assert!(stay.room().is_none());
//! ```

pub mod allocator;
pub mod availability;
pub mod calendar;
pub mod config;
pub mod conflicts;
pub mod database;
pub mod error;
pub mod frontdesk;
pub mod logging;
pub mod pool;
pub mod room;
pub mod stay;

// Re-export key types at crate root for convenience
pub use allocator::ClaimOutcome;
pub use availability::{Availability, AvailabilityCalendar};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use frontdesk::Frontdesk;
pub use logging::{init_logger, LogLevel, Logger};
pub use pool::{RoomClaim, RoomPool};
pub use room::Room;
pub use stay::{Stay, StayBuilder, StayId};
