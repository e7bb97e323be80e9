//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the vacancy reservation store.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the stays table.
///
/// Dates are stored as ISO-8601 TEXT (`YYYY-MM-DD`), so lexicographic
/// comparison in SQL matches chronological order and BETWEEN works on the
/// raw column. The room column is NULL only for rows persisted before
/// allocation, which normal operation never produces.
pub const CREATE_STAYS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS stays (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL,
        arrival_date TEXT NOT NULL,
        departure_date TEXT NOT NULL,
        room INTEGER
    )";

/// SQL statement to create an index on the arrival date column.
///
/// Every conflict and availability query is a range scan over arrivals.
pub const CREATE_ARRIVAL_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_stays_arrival ON stays(arrival_date)";

/// SQL statement to create an index on the room column.
pub const CREATE_ROOM_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_stays_room ON stays(room)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a fresh stay, letting the store assign the id.
pub const INSERT_STAY: &str = r"
    INSERT INTO stays
    (first_name, last_name, email, arrival_date, departure_date, room)
    VALUES (?, ?, ?, ?, ?, ?)
";

/// SQL statement to insert a stay under an explicit id.
///
/// Used when an update targets an id whose row has vanished between the
/// lookup and the write.
pub const INSERT_STAY_WITH_ID: &str = r"
    INSERT INTO stays
    (id, first_name, last_name, email, arrival_date, departure_date, room)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";

/// SQL statement to rewrite every mutable column of a stay.
pub const UPDATE_STAY: &str = r"
    UPDATE stays
    SET first_name = ?, last_name = ?, email = ?,
        arrival_date = ?, departure_date = ?, room = ?
    WHERE id = ?
";

/// SQL statement to delete a stay by id.
pub const DELETE_STAY: &str = "DELETE FROM stays WHERE id = ?";
