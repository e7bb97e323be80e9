//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the vacancy data directory and database.

use std::path::PathBuf;

use clap::Args;
use vacancy::database::default_data_dir;
use vacancy::{Database, DatabaseConfig};

use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Template written by `--with-config`; every key is optional.
const CONFIG_TEMPLATE: &str = "\
# vacancy configuration
#
# total_rooms: 10
# maximum_lock_wait_seconds: 5
";

/// Initialize the vacancy data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Data directory to initialize
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Create a default configuration file
    #[arg(long)]
    with_config: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// The `--data-dir` flag has a different meaning here than on other
    /// commands: where to create, not where to find.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Priority: command flag > global flag > default
        let data_dir = match self.data_dir.or_else(|| global.data_dir.clone()) {
            Some(dir) => dir,
            None => default_data_dir().map_err(|_| CliError::NoDataDirectory)?,
        };

        let data_dir_created = !data_dir.exists();

        // Opening the database creates the directory, the file, and the
        // schema in one step
        let db_path = data_dir.join("vacancy.db");
        let database_created = !db_path.exists();
        let _db = Database::open(DatabaseConfig::new(&db_path))?;

        let mut config_created = false;
        if self.with_config {
            let config_path = data_dir.join("config.yaml");
            if config_path.exists() {
                if !global.quiet {
                    eprintln!(
                        "Configuration file already exists (not overwritten): {}",
                        config_path.display()
                    );
                }
            } else {
                std::fs::write(&config_path, CONFIG_TEMPLATE)?;
                config_created = true;
            }
        }

        println!("Initialized vacancy in: {}", data_dir.display());
        if data_dir_created {
            println!("  - Created data directory");
        }
        if database_created {
            println!("  - Created database");
        } else {
            println!("  - Database already exists");
        }
        if config_created {
            println!("  - Created default configuration file");
        }

        Ok(())
    }
}
