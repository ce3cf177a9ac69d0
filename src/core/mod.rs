//! Core module: grade-point computation, persistence and reporting

pub mod calculator;
pub mod config;
pub mod error;
pub mod grading;
pub mod models;
pub mod report;
pub mod storage;

/// Returns the current version of the `GpaCalc` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
