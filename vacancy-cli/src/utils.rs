//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI
//! commands, including configuration loading, database management, and
//! argument parsing.

use std::path::PathBuf;

use chrono::NaiveDate;
use vacancy::database::default_data_dir;
use vacancy::{Config, ConfigBuilder, Database, DatabaseConfig, Frontdesk};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the configured number of rooms.
    pub total_rooms: Option<u16>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The user configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    let overrides = Config {
        total_rooms: global.total_rooms,
        ..Default::default()
    };

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the database path from the configuration.
fn resolve_database_path(config: &Config) -> Result<PathBuf, CliError> {
    let data_dir = match config.data_dir {
        Some(ref dir) => dir.clone(),
        None => default_data_dir().map_err(|_| CliError::NoDataDirectory)?,
    };
    Ok(data_dir.join("vacancy.db"))
}

/// Open the database, creating it on first use.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_database_path(config)?;

    let mut db_config = DatabaseConfig::new(db_path);

    // Set busy timeout if specified
    if let Some(timeout_seconds) = global.busy_timeout {
        db_config =
            db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds.into()));
    } else if let Some(timeout_seconds) = config.maximum_lock_wait_seconds {
        db_config = db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Build the frontdesk sized by the configuration.
pub fn build_frontdesk(config: &Config) -> Result<Frontdesk, CliError> {
    Frontdesk::from_config(config).map_err(CliError::from)
}

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        CliError::InvalidArguments(format!("{field} must be a date in YYYY-MM-DD format"))
    })
}
