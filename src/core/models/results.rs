//! Calculation result models

use serde::{Deserialize, Serialize};

/// A subject that passed validation, with its resolved grade point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectResult {
    /// Course code (trimmed)
    pub code: String,
    /// Course name (trimmed)
    pub name: String,
    /// Letter grade (trimmed)
    pub grade: String,
    /// Parsed credit weight
    pub credits: f64,
    /// Grade point under the selected system
    pub point: f64,
}

/// Per-semester outcome; only emitted for semesters with at least one valid subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterResult {
    /// 1-based position of the semester in the input
    pub index: usize,
    /// Valid subjects in input order
    pub subjects: Vec<SubjectResult>,
    /// Semester GPA, rounded to 2 decimals
    pub gpa: f64,
    /// Sum of valid credits in this semester
    pub total_credits: f64,
    /// Unrounded sum of point x credits in this semester
    pub grade_points: f64,
    /// CGPA over semesters 1..=index, rounded to 2 decimals
    pub cumulative_cgpa: f64,
}

impl SemesterResult {
    /// Label used on chart axes (e.g., "Sem 2")
    #[must_use]
    pub fn short_label(&self) -> String {
        format!("Sem {}", self.index)
    }
}

/// Full calculation output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpaSummary {
    /// Identifier of the grading system actually used
    pub system_id: String,
    /// Display name of that system
    pub system_name: String,
    /// Semesters that had at least one valid subject
    pub semesters: Vec<SemesterResult>,
    /// Unrounded sum of point x credits across all semesters
    pub total_points: f64,
    /// Sum of valid credits across all semesters
    pub total_credits: f64,
    /// Final CGPA, rounded to 2 decimals
    pub cgpa: f64,
}

impl GpaSummary {
    /// Whether no semester qualified
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }

    /// Total number of valid subjects
    #[must_use]
    pub fn subject_count(&self) -> usize {
        self.semesters.iter().map(|s| s.subjects.len()).sum()
    }
}
