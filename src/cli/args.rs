//! CLI argument definitions for `GpaCalc`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gpa_calc::config::ConfigOverrides;
use gpa_calc::logger::Level;
use gpa_calc::models::SubjectPatch;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Level::from(*self).as_str())
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_dir`, `default_system`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum SemesterSubcommand {
    /// Append a semester with one blank subject row.
    Add,
    /// Remove a semester; later semesters are renumbered.
    Remove {
        /// Semester number (1-based)
        #[arg(value_name = "N")]
        number: usize,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum SubjectSubcommand {
    /// Append a subject row to a semester.
    Add {
        /// Semester number (1-based)
        #[arg(value_name = "SEMESTER")]
        semester: usize,
        /// Course code
        #[arg(long, default_value = "")]
        code: String,
        /// Course name
        #[arg(long, default_value = "")]
        name: String,
        /// Letter grade
        #[arg(long, default_value = "HD")]
        grade: String,
        /// Credit weight
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        credits: String,
    },
    /// Remove a subject row.
    Remove {
        /// Semester number (1-based)
        #[arg(value_name = "SEMESTER")]
        semester: usize,
        /// Row number within the semester (1-based)
        #[arg(value_name = "ROW")]
        row: usize,
    },
    /// Change fields of a subject row.
    Set {
        /// Semester number (1-based)
        #[arg(value_name = "SEMESTER")]
        semester: usize,
        /// Row number within the semester (1-based)
        #[arg(value_name = "ROW")]
        row: usize,
        /// New course code
        #[arg(long)]
        code: Option<String>,
        /// New course name
        #[arg(long)]
        name: Option<String>,
        /// New letter grade
        #[arg(long)]
        grade: Option<String>,
        /// New credit weight
        #[arg(long, allow_hyphen_values = true)]
        credits: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// List available grading systems and their grade points.
    Systems,
    /// Show or select the grading system of the grade book.
    System {
        /// Grading system identifier (e.g., AUS, MY)
        #[arg(value_name = "ID")]
        id: Option<String>,
    },
    /// Add or remove semesters.
    Semester {
        #[command(subcommand)]
        subcommand: SemesterSubcommand,
    },
    /// Add, remove or edit subject rows.
    Subject {
        #[command(subcommand)]
        subcommand: SubjectSubcommand,
    },
    /// Print all entered semesters and subjects.
    Show,
    /// Calculate semester GPA and cumulative CGPA.
    Calculate {
        /// Also print the progression chart as Mermaid
        #[arg(long)]
        chart: bool,
    },
    /// Write a GPA report with a progression chart.
    Report {
        /// Output file path (optional; defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,
    },
    /// Clear all entered data (requires confirmation).
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gpacalc",
    about = "Semester GPA and cumulative CGPA calculator",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the directory holding the saved grade book
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the report output directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Override the grading system used for a fresh grade book
    #[arg(long = "default-system", value_name = "ID")]
    pub default_system: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means no override for that field.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path_string = |p: &PathBuf| p.to_string_lossy().to_string();
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(path_string),
            verbose: self.config_verbose,
            data_dir: self.data_dir.as_ref().map(path_string),
            reports_dir: self.reports_dir.as_ref().map(path_string),
            default_system: self.default_system.clone(),
        }
    }
}

impl SubjectSubcommand {
    /// Field changes requested by `subject set`; `None` for other subcommands
    pub fn patch(&self) -> Option<SubjectPatch> {
        match self {
            Self::Set {
                code,
                name,
                grade,
                credits,
                ..
            } => Some(SubjectPatch {
                code: code.clone(),
                name: name.clone(),
                grade: grade.clone(),
                credits: credits.clone(),
            }),
            _ => None,
        }
    }
}
