//! Database layer for persistent storage of stays.
//!
//! This module provides a SQLite-based storage layer for managing stays,
//! including connection management, schema versioning, and CRUD
//! operations.
//!
//! # Examples
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use vacancy::database::{Database, DatabaseConfig};
//! use vacancy::Stay;
//!
//! // Open a database
//! let config = DatabaseConfig::new("/tmp/vacancy.db");
//! let mut db = Database::open(config).unwrap();
//!
//! // Persist a stay
//! let arrival = NaiveDate::from_ymd_opt(2021, 7, 1).unwrap();
//! let stay = Stay::builder(arrival, arrival).build().unwrap();
//! let persisted = db.save_stay(&stay).unwrap();
//!
//! // List all stays
//! for stay in db.list_all_stays().unwrap() {
//!     println!("{:?}", stay);
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
