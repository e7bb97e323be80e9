//! Configuration file discovery and loading.
//!
//! One file matters: `config.yaml` inside the data directory (the default
//! data directory when none is given). A missing file is not an error; a
//! file that exists but does not parse is.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::database::default_data_dir;
use crate::error::{Error, Result};

/// Loads configuration from the user's config file.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Returns the path the user config is read from.
    ///
    /// `{data_dir}/config.yaml` when a data directory is given, otherwise
    /// `config.yaml` in the default data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no data directory is given and the home
    /// directory cannot be determined.
    pub fn user_config_path(data_dir: Option<&Path>) -> Result<PathBuf> {
        let dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => default_data_dir()?,
        };
        Ok(dir.join("config.yaml"))
    }

    /// Loads the user config file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config(data_dir: Option<&Path>) -> Result<Option<Config>> {
        let path = Self::user_config_path(data_dir)?;
        if !path.exists() {
            return Ok(None);
        }
        Self::load_file(&path).map(Some)
    }

    /// Loads and parses a single configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML
    /// for the schema.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(Error::Io)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}
