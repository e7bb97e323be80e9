//! Configuration schema definitions.
//!
//! The schema is deliberately small: the pool size, where the data lives,
//! and how long to wait for the store's lock.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Pool size used when no configuration source sets one.
pub const DEFAULT_TOTAL_ROOMS: u16 = 10;

/// Seconds to wait on a busy store before giving up, when unset.
pub const DEFAULT_MAXIMUM_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// Every field is optional so that partial sources (a config file, the
/// environment, CLI flags) can be merged field by field; the builder fills
/// in defaults last.
///
/// # Examples
///
/// ```
/// use vacancy::config::Config;
///
/// let config = Config {
///     total_rooms: Some(20),
///     ..Default::default()
/// };
/// assert_eq!(config.total_rooms, Some(20));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number of rooms in the pool.
    pub total_rooms: Option<u16>,

    /// Directory holding the database and user config file.
    pub data_dir: Option<PathBuf>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,
}
