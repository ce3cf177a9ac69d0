//! Mermaid chart generator for GPA progression
//!
//! Generates Mermaid `xychart-beta` syntax that can be embedded in Markdown
//! files and rendered by GitHub, GitLab, and other Markdown viewers.

use super::{ProgressionChart, Y_MAX, Y_MIN};
use std::fmt::Write;

/// Generator for Mermaid diagram syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Generate a line chart with the GPA series first and the CGPA series second
    ///
    /// Returns an empty string when there are no points.
    #[must_use]
    pub fn progression_chart(chart: &ProgressionChart) -> String {
        if chart.is_empty() {
            return String::new();
        }

        let labels: Vec<String> = chart
            .labels()
            .map(|l| format!("\"{}\"", Self::sanitize_label(l)))
            .collect();

        let mut output = String::from("```mermaid\nxychart-beta\n");
        output.push_str("    title \"GPA and CGPA Progression\"\n");
        let _ = writeln!(output, "    x-axis [{}]", labels.join(", "));
        let _ = writeln!(output, "    y-axis \"Grade Point\" {Y_MIN:.1} --> {Y_MAX:.1}");
        let _ = writeln!(output, "    line [{}]", Self::series(chart.gpa_series()));
        let _ = writeln!(output, "    line [{}]", Self::series(chart.cgpa_series()));
        output.push_str("```\n");
        output
    }

    fn series(values: impl Iterator<Item = f64>) -> String {
        values
            .map(|v| format!("{v:.2}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Strip characters that would break a quoted Mermaid label
    fn sanitize_label(label: &str) -> String {
        label
            .chars()
            .map(|c| if matches!(c, '"' | '[' | ']') { '\'' } else { c })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::visualization::ChartPoint;

    fn point(semester: usize, gpa: f64, cgpa: f64) -> ChartPoint {
        ChartPoint {
            semester,
            label: format!("Sem {semester}"),
            gpa,
            cgpa,
        }
    }

    #[test]
    fn test_mermaid_progression_chart() {
        let chart = ProgressionChart {
            points: vec![point(1, 4.0, 4.0), point(2, 1.0, 2.5)],
        };

        let diagram = MermaidGenerator::progression_chart(&chart);

        assert!(diagram.starts_with("```mermaid\nxychart-beta\n"));
        assert!(diagram.contains("x-axis [\"Sem 1\", \"Sem 2\"]"));
        assert!(diagram.contains("y-axis \"Grade Point\" 0.0 --> 4.0"));
        assert!(diagram.contains("line [4.00, 1.00]"));
        assert!(diagram.contains("line [4.00, 2.50]"));
        assert!(diagram.ends_with("```\n"));
    }

    #[test]
    fn test_empty_chart_renders_nothing() {
        assert!(MermaidGenerator::progression_chart(&ProgressionChart::default()).is_empty());
    }

    #[test]
    fn test_sanitize_label() {
        assert_eq!(MermaidGenerator::sanitize_label("Sem \"1\""), "Sem '1'");
        assert_eq!(MermaidGenerator::sanitize_label("[x]"), "'x'");
    }
}
