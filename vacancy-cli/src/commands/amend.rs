//! Amend command implementation.
//!
//! This module implements the `amend` command, which rewrites an existing
//! stay with a new window and guest fields.

use clap::Args;
use vacancy::{Stay, StayId};

use crate::error::CliError;
use crate::utils::{build_frontdesk, load_configuration, open_database, parse_date, GlobalOptions};

/// Amend an existing stay.
#[derive(Args)]
pub struct AmendCommand {
    /// Id of the stay to amend
    #[arg(value_name = "ID")]
    pub id: i64,

    /// New arrival date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub arrival: String,

    /// New departure date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub departure: String,

    /// Guest's first name
    #[arg(long, value_name = "NAME", default_value = "")]
    pub first_name: String,

    /// Guest's last name
    #[arg(long, value_name = "NAME", default_value = "")]
    pub last_name: String,

    /// Guest's email address
    #[arg(long, value_name = "EMAIL", default_value = "")]
    pub email: String,

    /// Print the amended stay as JSON
    #[arg(long)]
    pub json: bool,
}

impl AmendCommand {
    /// Execute the amend command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let arrival = parse_date(&self.arrival, "arrival")?;
        let departure = parse_date(&self.departure, "departure")?;

        let request = Stay::builder(arrival, departure)
            .first_name(self.first_name)
            .last_name(self.last_name)
            .email(self.email)
            .build()
            .map_err(vacancy::Error::from)?;

        let config = load_configuration(global)?;
        let frontdesk = build_frontdesk(&config)?;
        let mut db = open_database(global, &config)?;

        let updated = frontdesk.update(&mut db, StayId::new(self.id), &request)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&updated)?);
        } else if !global.quiet {
            if let (Some(id), Some(room)) = (updated.id(), updated.room()) {
                eprintln!(
                    "Amended stay {id}: room {room}, {} to {}",
                    updated.arrival_date(),
                    updated.departure_date()
                );
            }
        }

        Ok(())
    }
}
