//! Common test utilities for integration tests.

use chrono::NaiveDate;
use tempfile::TempDir;

use vacancy::database::{Database, DatabaseConfig};
use vacancy::Stay;

/// Creates a test database in a temporary directory, returning the
/// directory so the caller controls its lifetime.
#[allow(dead_code)]
pub fn create_test_database() -> (TempDir, Database) {
    let dir = tempfile::tempdir().unwrap();
    let db = open_database(&dir);
    (dir, db)
}

/// Opens a connection to the database inside the given directory.
///
/// Each call returns an independent connection, so concurrent tests can
/// give every thread its own handle against the same file.
#[allow(dead_code)]
pub fn open_database(dir: &TempDir) -> Database {
    let config = DatabaseConfig::new(dir.path().join("vacancy.db"));
    Database::open(config).unwrap()
}

/// Shorthand for a calendar date in tests.
#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Builds a stay request with fixed guest fields.
#[allow(dead_code)]
pub fn request(arrival: NaiveDate, departure: NaiveDate) -> Stay {
    Stay::builder(arrival, departure)
        .first_name("Ada")
        .last_name("Lovelace")
        .email("ada@example.com")
        .build()
        .unwrap()
}
