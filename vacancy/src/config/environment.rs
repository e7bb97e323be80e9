//! Environment variable handling for configuration overrides.
//!
//! This module provides support for VACANCY_* environment variables that
//! override configuration file values.

use std::env;
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use vacancy::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads `VACANCY_TOTAL_ROOMS`, `VACANCY_DATA_DIR`, and
    /// `VACANCY_MAXIMUM_LOCK_WAIT_SECONDS`, with higher precedence than
    /// file-based configs.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., a non-numeric room count).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var("VACANCY_TOTAL_ROOMS") {
            config.total_rooms = Some(val.parse().map_err(|_| Error::Validation {
                field: "VACANCY_TOTAL_ROOMS".into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        if let Ok(val) = env::var("VACANCY_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(val));
        }

        if let Ok(val) = env::var("VACANCY_MAXIMUM_LOCK_WAIT_SECONDS") {
            config.maximum_lock_wait_seconds =
                Some(val.parse().map_err(|_| Error::Validation {
                    field: "VACANCY_MAXIMUM_LOCK_WAIT_SECONDS".into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        Ok(())
    }
}
