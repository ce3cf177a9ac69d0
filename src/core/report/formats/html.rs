//! HTML report generator
//!
//! Renders a self-contained page (embedded CSS, inline SVG chart) through a
//! compiled askama template. User-entered text is escaped by the template.

use crate::core::models::SemesterResult;
use crate::core::report::visualization::SvgChart;
use crate::core::report::{format_credits, format_point, ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

/// One subject row as displayed
struct SubjectRow<'a> {
    code: &'a str,
    name: &'a str,
    grade: &'a str,
    credits: String,
    point: String,
}

/// One semester table as displayed
struct SemesterSection<'a> {
    index: usize,
    gpa: String,
    cgpa: String,
    credits: String,
    rows: Vec<SubjectRow<'a>>,
}

impl<'a> SemesterSection<'a> {
    fn from_result(sem: &'a SemesterResult) -> Self {
        Self {
            index: sem.index,
            gpa: format_point(sem.gpa),
            cgpa: format_point(sem.cumulative_cgpa),
            credits: format_credits(sem.total_credits),
            rows: sem
                .subjects
                .iter()
                .map(|s| SubjectRow {
                    code: &s.code,
                    name: &s.name,
                    grade: &s.grade,
                    credits: format_credits(s.credits),
                    point: format_point(s.point),
                })
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "report.html")]
struct HtmlReportTemplate<'a> {
    system_name: &'a str,
    final_cgpa: String,
    total_credits: String,
    semester_count: usize,
    semesters: Vec<SemesterSection<'a>>,
    chart_svg: String,
    generator: String,
}

/// HTML report generator
pub struct HtmlReporter {
    chart: SvgChart,
}

impl HtmlReporter {
    /// Create a new HTML reporter with the default chart size
    #[must_use]
    pub fn new() -> Self {
        Self {
            chart: SvgChart::default(),
        }
    }

    /// Use a custom chart size
    #[must_use]
    pub const fn with_chart(chart: SvgChart) -> Self {
        Self { chart }
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let template = HtmlReportTemplate {
            system_name: ctx.system_name(),
            final_cgpa: ctx.final_cgpa(),
            total_credits: ctx.total_credits(),
            semester_count: ctx.semester_count(),
            semesters: ctx
                .summary
                .semesters
                .iter()
                .map(SemesterSection::from_result)
                .collect(),
            chart_svg: self.chart.render(&ctx.chart),
            generator: ctx.generator(),
        };
        Ok(template.render()?)
    }
}
