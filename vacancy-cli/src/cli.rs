//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    AmendCommand, BookCommand, CancelCommand, InitCommand, ListCommand, ShowCommand,
    VacanciesCommand,
};

/// Command-line tool for managing room reservations.
#[derive(Parser)]
#[command(name = "vacancy")]
#[command(version, about = "Manage room reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "VACANCY_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the configured number of rooms
    #[arg(long, value_name = "COUNT", global = true, env = "VACANCY_TOTAL_ROOMS")]
    pub total_rooms: Option<u16>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "VACANCY_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and database
    Init(InitCommand),

    /// Book a new stay
    Book(BookCommand),

    /// Amend an existing stay
    Amend(AmendCommand),

    /// Cancel a stay
    Cancel(CancelCommand),

    /// Show a single stay
    Show(ShowCommand),

    /// List stays in a date range
    List(ListCommand),

    /// Show per-day free-room counts
    Vacancies(VacanciesCommand),
}
