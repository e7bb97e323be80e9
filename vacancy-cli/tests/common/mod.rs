//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including an
//! isolated test environment with its own data directory and command
//! builders for common patterns.

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the vacancy data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory path is not created yet; the binary creates it
    /// on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("vacancy-data");

        Self { temp_dir, data_dir }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("vacancy").expect("Failed to find vacancy binary");
        // Keep the test hermetic against ambient overrides
        cmd.env_remove("VACANCY_DATA_DIR");
        cmd.env_remove("VACANCY_TOTAL_ROOMS");
        cmd.env_remove("VACANCY_BUSY_TIMEOUT");
        cmd.env_remove("VACANCY_MAXIMUM_LOCK_WAIT_SECONDS");
        cmd.env_remove("VACANCY_LOG_MODE");
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Book a stay with fixture guest fields and return the printed id.
    ///
    /// # Panics
    /// Panics if the book command fails or doesn't print a valid id.
    pub fn book_simple(&self, total_rooms: u16, arrival: &str, departure: &str) -> i64 {
        let output = self
            .command()
            .arg("--total-rooms")
            .arg(total_rooms.to_string())
            .arg("book")
            .arg("--arrival")
            .arg(arrival)
            .arg("--departure")
            .arg(departure)
            .arg("--first-name")
            .arg("Ada")
            .arg("--last-name")
            .arg("Lovelace")
            .arg("--email")
            .arg("ada@example.com")
            .output()
            .expect("Failed to run book command");

        assert!(
            output.status.success(),
            "Book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
        stdout.trim().parse().expect("Output is not a valid id")
    }
}
