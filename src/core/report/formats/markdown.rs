//! Markdown report generator
//!
//! Generates GPA reports in Markdown format with an embedded Mermaid chart.
//! These reports render well in GitHub, GitLab, and VS Code.

use crate::core::report::visualization::MermaidGenerator;
use crate::core::report::{
    escape_html, format_credits, format_point, ReportContext, ReportGenerator,
};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    fn render_template(ctx: &ReportContext) -> String {
        let values = [
            ("system_name", escape_cell(ctx.system_name())),
            ("semester_count", ctx.semester_count().to_string()),
            ("total_credits", ctx.total_credits()),
            ("final_cgpa", ctx.final_cgpa()),
            ("semester_tables", Self::generate_semester_tables(ctx)),
            (
                "progression_chart",
                MermaidGenerator::progression_chart(&ctx.chart),
            ),
            ("generator", ctx.generator()),
        ];
        fill_placeholders(MARKDOWN_TEMPLATE, &values)
    }

    /// One heading and table per semester
    fn generate_semester_tables(ctx: &ReportContext) -> String {
        let mut out = String::new();

        for sem in &ctx.summary.semesters {
            let _ = writeln!(
                out,
                "### Semester {} (GPA: {})\n",
                sem.index,
                format_point(sem.gpa)
            );
            out.push_str("| Code | Subject Name | Grade | Credits | Grade Point |\n");
            out.push_str("|---|---|---|---|---|\n");

            for subject in &sem.subjects {
                let _ = writeln!(
                    out,
                    "| {} | {} | {} | {} | {} |",
                    escape_cell(&subject.code),
                    escape_cell(&subject.name),
                    escape_cell(&subject.grade),
                    format_credits(subject.credits),
                    format_point(subject.point)
                );
            }

            let _ = writeln!(
                out,
                "\n{} credits, CGPA after this semester: **{}**\n",
                format_credits(sem.total_credits),
                format_point(sem.cumulative_cgpa)
            );
        }

        out
    }
}

/// Substitute `{{key}}` placeholders in one pass
///
/// Inserted values are copied verbatim and never scanned again. Unknown
/// placeholders are kept as written.
fn fill_placeholders(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        let key = &after[..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push_str("{{");
                out.push_str(key);
                out.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

/// Escape user text for a Markdown table cell
fn escape_cell(text: &str) -> String {
    escape_html(text).replace('|', "\\|")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::compute_results;
    use crate::core::grading::GradingCatalog;
    use crate::core::models::SubjectEntry;

    #[test]
    fn test_markdown_report() {
        let semesters = vec![vec![
            SubjectEntry::new("FIT1045", "Algorithms", "D", "12"),
            SubjectEntry::new("FIT1008", "Intro | CS", "C", "6"),
        ]];
        let summary = compute_results(&GradingCatalog::builtin(), "MY", &semesters);

        let md = MarkdownReporter::new()
            .render(&ReportContext::new(&summary))
            .unwrap();

        assert!(md.contains("**Grading system:** Malaysia"));
        assert!(md.contains("## Cumulative GPA: 3.45"));
        assert!(md.contains("### Semester 1 (GPA: 3.45)"));
        assert!(md.contains("| FIT1045 | Algorithms | D | 12 | 3.67 |"));
        assert!(md.contains("Intro \\| CS"));
        assert!(md.contains("```mermaid"));
        assert!(!md.contains("{{"));
    }

    #[test]
    fn test_placeholder_text_in_user_input_is_left_alone() {
        let mut catalog = GradingCatalog::builtin();
        catalog
            .extend_from_toml(
                r#"
[[systems]]
id = "T"
name = "{{semester_tables}}"
grades = [["A", 4.0]]
"#,
            )
            .unwrap();
        let semesters = vec![vec![SubjectEntry::new(
            "{{system_name}}",
            "{{final_cgpa}}",
            "A",
            "3",
        )]];
        let summary = compute_results(&catalog, "T", &semesters);

        let md = MarkdownReporter::new()
            .render(&ReportContext::new(&summary))
            .unwrap();

        assert!(md.contains("**Grading system:** {{semester_tables}}"));
        assert!(md.contains("| {{system_name}} | {{final_cgpa}} | A | 3 | 4.00 |"));
        assert_eq!(md.matches("### Semester 1").count(), 1);
    }

    #[test]
    fn test_fill_placeholders() {
        let values = [("a", "{{b}}".to_string()), ("b", "x".to_string())];
        assert_eq!(
            fill_placeholders("{{a}}-{{b}}-{{c}}-{{", &values),
            "{{b}}-x-{{c}}-{{"
        );
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("<i>a|b</i>"), "&lt;i&gt;a\\|b&lt;/i&gt;");
    }
}
