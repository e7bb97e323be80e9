//! Cancel command implementation.
//!
//! This module implements the `cancel` command. Cancellation is
//! idempotent: cancelling an unknown id succeeds quietly.

use clap::Args;
use vacancy::StayId;

use crate::error::CliError;
use crate::utils::{build_frontdesk, load_configuration, open_database, GlobalOptions};

/// Cancel a stay.
#[derive(Args)]
pub struct CancelCommand {
    /// Id of the stay to cancel
    #[arg(value_name = "ID")]
    pub id: i64,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let frontdesk = build_frontdesk(&config)?;
        let db = open_database(global, &config)?;

        frontdesk.delete(&db, StayId::new(self.id))?;

        if !global.quiet {
            eprintln!("Cancelled stay {}", self.id);
        }

        Ok(())
    }
}
