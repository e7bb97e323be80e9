//! Vacancies command implementation.
//!
//! This module implements the `vacancies` command, which prints the
//! per-day free-room counts for a date range.

use clap::Args;
use vacancy::Availability;

use crate::commands::list::OutputFormat;
use crate::error::CliError;
use crate::utils::{build_frontdesk, load_configuration, open_database, parse_date, GlobalOptions};

/// Show per-day free-room counts.
///
/// Without `--start` the range begins two days before today; without
/// `--end` (or with an end before the start) it spans 31 days.
#[derive(Args)]
pub struct VacanciesCommand {
    /// Start of the range (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start: Option<String>,

    /// End of the range, inclusive (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub end: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

impl VacanciesCommand {
    /// Execute the vacancies command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let start = self
            .start
            .as_deref()
            .map(|s| parse_date(s, "start"))
            .transpose()?;
        let end = self
            .end
            .as_deref()
            .map(|s| parse_date(s, "end"))
            .transpose()?;

        let config = load_configuration(global)?;
        let frontdesk = build_frontdesk(&config)?;
        let db = open_database(global, &config)?;

        let availabilities: Vec<Availability> =
            frontdesk.availabilities(&db, start, end)?.collect();

        match self.format {
            OutputFormat::Table => {
                println!("DATE\tFREE");
                for availability in &availabilities {
                    println!("{}\t{}", availability.date, availability.free_rooms);
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&availabilities)?),
        }

        Ok(())
    }
}
