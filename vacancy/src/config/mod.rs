//! Configuration system for vacancy.
//!
//! This module provides layered configuration with support for:
//! - A YAML user config file (`config.yaml` in the data directory)
//! - Environment variable overrides (VACANCY_*)
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (VACANCY_*)
//! 3. User config (`{data_dir}/config.yaml`, default `~/.vacancy/config.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```no_run
//! use vacancy::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("Rooms: {:?}", config.total_rooms);
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use vacancy::config::{Config, ConfigBuilder};
//!
//! let custom = Config {
//!     total_rooms: Some(4),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.total_rooms, Some(4));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::{Config, DEFAULT_MAXIMUM_LOCK_WAIT_SECONDS, DEFAULT_TOTAL_ROOMS};
