//! List command implementation.
//!
//! This module implements the `list` command, which displays the stays
//! touching a date range in table or JSON format.

use clap::{Args, ValueEnum};
use vacancy::Stay;

use crate::error::CliError;
use crate::utils::{build_frontdesk, load_configuration, open_database, parse_date, GlobalOptions};

/// Column headers for table output.
const COLUMN_HEADERS: [&str; 6] = ["id", "arrival", "departure", "room", "guest", "email"];

/// List stays in a date range.
#[derive(Args)]
pub struct ListCommand {
    /// Start of the range (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start: String,

    /// End of the range, inclusive (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub end: String,

    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

/// Output format for list and vacancies commands.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let start = parse_date(&self.start, "start")?;
        let end = parse_date(&self.end, "end")?;
        if end < start {
            return Err(CliError::InvalidArguments(
                "end must be the same day or later than start".to_string(),
            ));
        }

        let config = load_configuration(global)?;
        let frontdesk = build_frontdesk(&config)?;
        let db = open_database(global, &config)?;

        let stays = frontdesk.stays_in_range(&db, start, end)?;

        match self.format {
            OutputFormat::Table => format_as_table(&stays),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stays)?),
        }

        Ok(())
    }
}

/// Format stays as a human-readable table.
fn format_as_table(stays: &[Stay]) {
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    println!("{header_line}");

    for stay in stays {
        let id = stay.id().map_or_else(String::new, |id| id.to_string());
        let room = stay
            .room()
            .map_or_else(|| "-".to_string(), |room| room.to_string());
        println!(
            "{id}\t{}\t{}\t{room}\t{} {}\t{}",
            stay.arrival_date(),
            stay.departure_date(),
            stay.first_name(),
            stay.last_name(),
            stay.email()
        );
    }
}
