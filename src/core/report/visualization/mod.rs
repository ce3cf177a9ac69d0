//! GPA/CGPA progression charts
//!
//! [`ProgressionChart`] holds the two series shared by every renderer: GPA
//! per semester and running CGPA, on a categorical x-axis and a fixed
//! `[0, 4.0]` y-axis.

pub mod mermaid;
pub mod svg;

pub use mermaid::MermaidGenerator;
pub use svg::SvgChart;

use crate::core::grading::MAX_GRADE_POINT;
use crate::core::models::{GpaSummary, SemesterResult};

/// Lower bound of the y-axis
pub const Y_MIN: f64 = 0.0;
/// Upper bound of the y-axis
pub const Y_MAX: f64 = MAX_GRADE_POINT;

/// One x-axis category
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Semester number from the input
    pub semester: usize,
    /// Axis label (e.g., "Sem 3")
    pub label: String,
    /// Semester GPA (rounded)
    pub gpa: f64,
    /// Running CGPA (rounded)
    pub cgpa: f64,
}

/// Data for the GPA/CGPA line chart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressionChart {
    /// Points in semester order
    pub points: Vec<ChartPoint>,
}

impl ProgressionChart {
    /// Build from semester results, preserving their order
    #[must_use]
    pub fn from_results(results: &[SemesterResult]) -> Self {
        let points = results
            .iter()
            .map(|sem| ChartPoint {
                semester: sem.index,
                label: sem.short_label(),
                gpa: sem.gpa,
                cgpa: sem.cumulative_cgpa,
            })
            .collect();
        Self { points }
    }

    /// Build from a full calculation summary
    #[must_use]
    pub fn from_summary(summary: &GpaSummary) -> Self {
        Self::from_results(&summary.semesters)
    }

    /// Whether there is anything to draw
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// X-axis labels
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|p| p.label.as_str())
    }

    /// GPA series
    pub fn gpa_series(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.gpa)
    }

    /// CGPA series
    pub fn cgpa_series(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.cgpa)
    }
}
