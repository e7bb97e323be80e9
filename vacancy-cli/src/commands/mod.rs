//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Initialize the data directory and database
//! - `book`: Book a new stay
//! - `amend`: Amend an existing stay
//! - `cancel`: Cancel a stay
//! - `show`: Show a single stay
//! - `list`: List stays in a date range
//! - `vacancies`: Show per-day free-room counts

pub mod amend;
pub mod book;
pub mod cancel;
pub mod init;
pub mod list;
pub mod show;
pub mod vacancies;

pub use amend::AmendCommand;
pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use show::ShowCommand;
pub use vacancies::VacanciesCommand;
