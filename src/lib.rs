//! Shared library for `GpaCalc`
//! Contains the grade-point computation core used by the CLI and the report renderers

pub mod core;
pub mod logger;

pub use crate::core::*;
