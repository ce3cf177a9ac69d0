//! Error types for the `GpaCalc` library
//!
//! Skippable input defects (blank fields, bad credit values) never surface
//! here; they are filtered out by the calculator and only logged.

use thiserror::Error;

/// Outcome of a calculation request that produced nothing to show
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Every semester was empty or contained only incomplete/invalid rows
    #[error("Please ensure you have at least one semester with valid subjects (all fields must be filled).")]
    NoValidSubjects,
}

/// Structural edit addressed a semester or row that does not exist
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// 1-based semester number out of range
    #[error("Semester {number} does not exist (grade book has {count} semester(s))")]
    NoSuchSemester {
        /// Requested semester number
        number: usize,
        /// Number of semesters present
        count: usize,
    },

    /// 1-based subject row out of range within a semester
    #[error("Semester {semester} has no subject row {row} ({count} row(s))")]
    NoSuchSubject {
        /// Semester number
        semester: usize,
        /// Requested row
        row: usize,
        /// Number of rows present
        count: usize,
    },

    /// Grading system identifier not present in the catalog
    #[error("Unknown grading system: '{0}'")]
    UnknownSystem(String),
}

/// Problems building a grading catalog from user-supplied tables
#[derive(Error, Debug)]
pub enum GradingError {
    /// Grading-system file is not valid TOML or has the wrong shape
    #[error("Failed to parse grading systems: {0}")]
    Parse(#[from] toml::de::Error),

    /// Grade point outside the supported scale
    #[error("Grade '{grade}' in system '{system}' has point {point}, expected a value in [0.0, 4.0]")]
    PointOutOfRange {
        /// System identifier
        system: String,
        /// Letter grade
        grade: String,
        /// Offending value
        point: f64,
    },

    /// System defines no grades
    #[error("Grading system '{0}' defines no grades")]
    Empty(String),

    /// System identifier is blank
    #[error("Grading system identifier must not be empty")]
    MissingId,
}

/// Failures in the key-value persistence layer
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem access failed
    #[error("Failed to access {path}: {source}")]
    Io {
        /// File involved
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Grade book could not be encoded
    #[error("Failed to serialize grade book: {0}")]
    Serialize(#[from] serde_json::Error),
}
