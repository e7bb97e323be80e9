//! Show command implementation.
//!
//! This module implements the `show` command, which displays a single
//! stay by id.

use clap::Args;
use vacancy::StayId;

use crate::error::CliError;
use crate::utils::{build_frontdesk, load_configuration, open_database, GlobalOptions};

/// Show a single stay.
#[derive(Args)]
pub struct ShowCommand {
    /// Id of the stay to show
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Print the stay as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let frontdesk = build_frontdesk(&config)?;
        let db = open_database(global, &config)?;

        let stay = frontdesk.get(&db, StayId::new(self.id))?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&stay)?);
            return Ok(());
        }

        println!("id: {}", self.id);
        println!("guest: {} {}", stay.first_name(), stay.last_name());
        println!("email: {}", stay.email());
        println!("arrival: {}", stay.arrival_date());
        println!("departure: {}", stay.departure_date());
        match stay.room() {
            Some(room) => println!("room: {room}"),
            None => println!("room: unassigned"),
        }

        Ok(())
    }
}
