//! Data models for `GpaCalc`

pub mod gradebook;
pub mod results;
pub mod subject;

pub use gradebook::GradeBook;
pub use results::{GpaSummary, SemesterResult, SubjectResult};
pub use subject::{SubjectEntry, SubjectPatch};
