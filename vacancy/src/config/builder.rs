//! Programmatic configuration assembly.
//!
//! The builder merges sources from lowest to highest precedence:
//! built-in defaults, the user config file, VACANCY_* environment
//! variables, then programmatic overrides. Every field of the result is
//! populated except `data_dir`, which stays `None` when nothing set it so
//! the database layer falls back to the default data directory.

use std::path::PathBuf;

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::{
    Config, DEFAULT_MAXIMUM_LOCK_WAIT_SECONDS, DEFAULT_TOTAL_ROOMS,
};
use crate::error::{Error, Result};

/// Builds a resolved [`Config`] from layered sources.
///
/// # Examples
///
/// ```
/// use vacancy::config::{Config, ConfigBuilder};
///
/// let custom = Config {
///     total_rooms: Some(4),
///     ..Default::default()
/// };
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(custom)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.total_rooms, Some(4));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the data directory, which also decides where the user config
    /// file is looked up.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    /// Skips loading the user config file.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips environment variable overrides.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Resolves the final configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the user config file exists but cannot be
    /// parsed, an environment variable holds an invalid value, or the
    /// resolved room count is zero.
    pub fn build(self) -> Result<Config> {
        let mut config = Config {
            total_rooms: Some(DEFAULT_TOTAL_ROOMS),
            data_dir: None,
            maximum_lock_wait_seconds: Some(DEFAULT_MAXIMUM_LOCK_WAIT_SECONDS),
        };

        if !self.skip_files {
            if let Some(file_config) = ConfigLoader::load_user_config(self.data_dir.as_deref())? {
                merge_into(&mut config, &file_config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            merge_into(&mut config, overrides);
        }

        if let Some(data_dir) = self.data_dir {
            config.data_dir = Some(data_dir);
        }

        validate(&config)?;
        Ok(config)
    }
}

/// Merge source config into target (source overwrites target where Some).
fn merge_into(target: &mut Config, source: &Config) {
    if source.total_rooms.is_some() {
        target.total_rooms = source.total_rooms;
    }
    if source.data_dir.is_some() {
        target.data_dir.clone_from(&source.data_dir);
    }
    if source.maximum_lock_wait_seconds.is_some() {
        target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
    }
}

fn validate(config: &Config) -> Result<()> {
    if config.total_rooms == Some(0) {
        return Err(Error::Validation {
            field: "total_rooms".into(),
            message: "the pool must contain at least one room".into(),
        });
    }
    Ok(())
}
