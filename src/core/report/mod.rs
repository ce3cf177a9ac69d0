//! Report generation for GPA results
//!
//! This module renders a [`GpaSummary`] in various formats (HTML, Markdown)
//! with a per-semester breakdown and a GPA/CGPA progression chart.

pub mod formats;
pub mod visualization;

use crate::core::get_version;
use crate::core::models::GpaSummary;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};
pub use visualization::{MermaidGenerator, ProgressionChart, SvgChart};

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Calculation results being reported
    pub summary: &'a GpaSummary,
    /// Chart series derived from the summary
    pub chart: ProgressionChart,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub fn new(summary: &'a GpaSummary) -> Self {
        Self {
            summary,
            chart: ProgressionChart::from_summary(summary),
        }
    }

    /// Display name of the grading system used
    #[must_use]
    pub fn system_name(&self) -> &str {
        &self.summary.system_name
    }

    /// Final CGPA with two decimals
    #[must_use]
    pub fn final_cgpa(&self) -> String {
        format_point(self.summary.cgpa)
    }

    /// Total credits across reported semesters
    #[must_use]
    pub fn total_credits(&self) -> String {
        format_credits(self.summary.total_credits)
    }

    /// Number of reported semesters
    #[must_use]
    pub fn semester_count(&self) -> usize {
        self.summary.semesters.len()
    }

    /// Footer line naming the generator
    #[must_use]
    pub fn generator(&self) -> String {
        format!("gpacalc v{}", get_version())
    }
}

/// GPA, CGPA or grade point with two decimals
#[must_use]
pub fn format_point(value: f64) -> String {
    format!("{value:.2}")
}

/// Credits without a trailing `.0` for whole numbers
#[must_use]
pub fn format_credits(value: f64) -> String {
    format!("{value}")
}

/// Escape text for embedding in HTML markup
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        std::fs::write(output_path, report_content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"R&D\"</b> 'x'"),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt; &#39;x&#39;"
        );
        assert_eq!(escape_html("FIT1045"), "FIT1045");
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_point(3.4), "3.40");
        assert_eq!(format_credits(12.0), "12");
        assert_eq!(format_credits(2.5), "2.5");
    }
}
