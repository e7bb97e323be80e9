//! Book command implementation.
//!
//! This module implements the `book` command, which books a new stay and
//! prints the assigned id.

use clap::Args;
use vacancy::Stay;

use crate::error::CliError;
use crate::utils::{build_frontdesk, load_configuration, open_database, parse_date, GlobalOptions};

/// Book a new stay.
#[derive(Args)]
pub struct BookCommand {
    /// Arrival date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub arrival: String,

    /// Departure date (YYYY-MM-DD)
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

    /// Print the booked stay as JSON
    #[arg(long)]
    pub json: bool,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Parse and validate the requested window
        let arrival = parse_date(&self.arrival, "arrival")?;
        let departure = parse_date(&self.departure, "departure")?;

        let request = Stay::builder(arrival, departure)
            .first_name(self.first_name)
            .last_name(self.last_name)
            .email(self.email)
            .build()
            .map_err(vacancy::Error::from)?;

        // 2. Load configuration and open the store
        let config = load_configuration(global)?;
        let frontdesk = build_frontdesk(&config)?;
        let mut db = open_database(global, &config)?;

        // 3. Book
        let booked = frontdesk.create(&mut db, &request)?;

        // 4. Output: JSON on request, otherwise just the id (shell-friendly)
        if self.json {
            println!("{}", serde_json::to_string_pretty(&booked)?);
        } else {
            if let Some(id) = booked.id() {
                println!("{id}");
            }
            if !global.quiet {
                if let (Some(id), Some(room)) = (booked.id(), booked.room()) {
                    eprintln!(
                        "Booked stay {id}: room {room}, {} to {}",
                        booked.arrival_date(),
                        booked.departure_date()
                    );
                }
            }
        }

        Ok(())
    }
}
