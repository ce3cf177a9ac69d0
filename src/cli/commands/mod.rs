//! CLI command handlers for `GpaCalc`.
//!
//! Each command is implemented in its own submodule. Commands that touch
//! the grade book share a [`Workspace`].

pub mod calculate;
pub mod config;
pub mod edit;
pub mod report;

use gpa_calc::config::Config;
use gpa_calc::grading::GradingCatalog;
use gpa_calc::models::GradeBook;
use gpa_calc::storage::{FileStore, StateRepository};
use gpa_calc::{debug, warn};
use std::io::{self, Write};
use std::path::PathBuf;

/// Grading catalog plus the persisted grade book
pub struct Workspace {
    /// Built-in and user-defined grading systems
    pub catalog: GradingCatalog,
    repository: StateRepository<FileStore>,
}

impl Workspace {
    /// Build the catalog and open the grade book store described by `config`
    pub fn open(config: &Config) -> Self {
        let catalog = load_catalog(&config.grading.systems_file);

        let default_system = if catalog.contains(&config.grading.default_system) {
            config.grading.default_system.clone()
        } else {
            if !config.grading.default_system.is_empty() {
                warn!(
                    "Unknown default grading system '{}'; using {}",
                    config.grading.default_system,
                    catalog.default_system().id
                );
            }
            catalog.default_system().id.clone()
        };

        let data_dir = if config.paths.data_dir.is_empty() {
            Config::get_gpacalc_dir().join("data")
        } else {
            PathBuf::from(&config.paths.data_dir)
        };
        debug!("Grade book directory: {}", data_dir.display());

        Self {
            catalog,
            repository: StateRepository::new(FileStore::new(data_dir), default_system),
        }
    }

    /// Current grade book (a fresh one if nothing usable is stored)
    pub fn load(&mut self) -> GradeBook {
        self.repository.load()
    }

    /// Persist the grade book; a failed write is reported but not fatal
    pub fn save(&mut self, book: &GradeBook) {
        if let Err(e) = self.repository.save(book) {
            warn!("Failed to save state: {e}");
            eprintln!("⚠ Changes could not be saved: {e}");
        }
    }

    /// Remove the stored grade book and return the fresh default
    pub fn reset(&mut self) -> GradeBook {
        if let Err(e) = self.repository.clear() {
            warn!("Failed to clear state: {e}");
        }
        let book = self.repository.default_book();
        self.save(&book);
        book
    }
}

/// Built-in grading systems, extended by the configured systems file
fn load_catalog(systems_file: &str) -> GradingCatalog {
    read_catalog(systems_file).unwrap_or_else(|e| {
        warn!("{e}");
        eprintln!("⚠ {e}");
        GradingCatalog::builtin()
    })
}

/// Built-in grading systems plus those in `systems_file` (if set)
///
/// # Errors
/// Returns an error if the file cannot be read or holds an invalid system.
fn read_catalog(systems_file: &str) -> Result<GradingCatalog, String> {
    let mut catalog = GradingCatalog::builtin();
    if systems_file.is_empty() {
        return Ok(catalog);
    }

    let content = std::fs::read_to_string(systems_file)
        .map_err(|e| format!("Cannot read grading systems file {systems_file}: {e}"))?;
    let count = catalog
        .extend_from_toml(&content)
        .map_err(|e| format!("Ignoring grading systems file {systems_file}: {e}"))?;
    debug!("Loaded {count} grading system(s) from {systems_file}");
    Ok(catalog)
}

/// Ask a yes/no question on stdin; anything but y/yes declines
pub fn confirm(prompt: &str) -> bool {
    print!("{prompt} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}
