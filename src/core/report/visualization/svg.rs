//! Inline SVG chart for HTML reports
//!
//! Points sit on a categorical axis with half a step of padding at each end;
//! the y-axis is linear over `[0, 4.0]` with five ticks.

use super::{ProgressionChart, Y_MAX, Y_MIN};
use std::fmt::Write;

const MARGIN_TOP: f64 = 20.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_LEFT: f64 = 50.0;
const DOT_RADIUS: f64 = 6.0;
const Y_TICKS: usize = 5;

const CGPA_COLOR: &str = "#2563eb";
const GPA_COLOR: &str = "#f59e0b";

/// SVG renderer with a fixed outer size
#[derive(Debug, Clone, Copy)]
pub struct SvgChart {
    width: f64,
    height: f64,
}

impl SvgChart {
    /// Chart with the given outer size in pixels
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn plot_width(&self) -> f64 {
        (self.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0)
    }

    fn plot_height(&self) -> f64 {
        (self.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0)
    }

    /// X position (within the plot area) of the `i`-th of `n` categories
    #[allow(clippy::cast_precision_loss)]
    fn x(&self, i: usize, n: usize) -> f64 {
        let step = self.plot_width() / n.max(1) as f64;
        step.mul_add(i as f64, step / 2.0)
    }

    /// Y position (within the plot area) of a grade-point value
    fn y(&self, value: f64) -> f64 {
        let clamped = value.clamp(Y_MIN, Y_MAX);
        self.plot_height() * (1.0 - (clamped - Y_MIN) / (Y_MAX - Y_MIN))
    }

    /// Render the chart; empty charts render as an empty string
    #[must_use]
    pub fn render(&self, chart: &ProgressionChart) -> String {
        if chart.is_empty() {
            return String::new();
        }

        let n = chart.points.len();
        let plot_w = self.plot_width();
        let plot_h = self.plot_height();
        let mut svg = String::new();

        let _ = writeln!(
            svg,
            "<svg class=\"progression-chart\" xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\" viewBox=\"0 0 {:.0} {:.0}\" font-family=\"sans-serif\" font-size=\"12\">",
            self.width, self.height, self.width, self.height
        );
        let _ = writeln!(
            svg,
            "<g transform=\"translate({MARGIN_LEFT:.0},{MARGIN_TOP:.0})\">"
        );

        // Y axis with ticks
        let _ = writeln!(
            svg,
            "<line class=\"chart-axis\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"{plot_h:.1}\" stroke=\"currentColor\"/>"
        );
        for tick in 0..Y_TICKS {
            #[allow(clippy::cast_precision_loss)]
            let value = Y_MIN + (Y_MAX - Y_MIN) * tick as f64 / (Y_TICKS - 1) as f64;
            let y = self.y(value);
            let _ = writeln!(
                svg,
                "<line x1=\"-6\" y1=\"{y:.1}\" x2=\"0\" y2=\"{y:.1}\" stroke=\"currentColor\"/><text x=\"-9\" y=\"{y:.1}\" dy=\"0.32em\" text-anchor=\"end\">{value:.1}</text>"
            );
        }

        // X axis with category labels
        let _ = writeln!(
            svg,
            "<line class=\"chart-axis\" x1=\"0\" y1=\"{plot_h:.1}\" x2=\"{plot_w:.1}\" y2=\"{plot_h:.1}\" stroke=\"currentColor\"/>"
        );
        for (i, label) in chart.labels().enumerate() {
            let x = self.x(i, n);
            let _ = writeln!(
                svg,
                "<text x=\"{x:.1}\" y=\"{:.1}\" text-anchor=\"middle\">{label}</text>",
                plot_h + 20.0
            );
        }

        self.write_series(&mut svg, "cgpa", CGPA_COLOR, chart.cgpa_series(), n);
        self.write_series(&mut svg, "gpa", GPA_COLOR, chart.gpa_series(), n);
        self.write_dots(&mut svg, chart, n);
        Self::write_legend(&mut svg, plot_w);

        svg.push_str("</g>\n</svg>\n");
        svg
    }

    fn write_series(
        &self,
        svg: &mut String,
        class: &str,
        color: &str,
        values: impl Iterator<Item = f64>,
        n: usize,
    ) {
        let points: Vec<String> = values
            .enumerate()
            .map(|(i, v)| format!("{:.1},{:.1}", self.x(i, n), self.y(v)))
            .collect();
        let _ = writeln!(
            svg,
            "<polyline class=\"chart-line {class}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"3\" points=\"{}\"/>",
            points.join(" ")
        );
    }

    fn write_dots(&self, svg: &mut String, chart: &ProgressionChart, n: usize) {
        for (i, p) in chart.points.iter().enumerate() {
            let x = self.x(i, n);
            let title = format!(
                "Semester {}: CGPA {:.2}, GPA {:.2}",
                p.semester, p.cgpa, p.gpa
            );
            for (class, color, value) in [("cgpa", CGPA_COLOR, p.cgpa), ("gpa", GPA_COLOR, p.gpa)] {
                let _ = writeln!(
                    svg,
                    "<circle class=\"chart-dot {class}\" cx=\"{x:.1}\" cy=\"{:.1}\" r=\"{DOT_RADIUS}\" fill=\"{color}\"><title>{title}</title></circle>",
                    self.y(value)
                );
            }
        }
    }

    fn write_legend(svg: &mut String, plot_w: f64) {
        let _ = writeln!(
            svg,
            "<g class=\"chart-legend\" transform=\"translate({:.1},0)\" text-anchor=\"end\">",
            plot_w - 10.0
        );
        for (row, (label, color)) in [("CGPA", CGPA_COLOR), ("GPA", GPA_COLOR)]
            .into_iter()
            .enumerate()
        {
            let offset = row * 20;
            let _ = writeln!(
                svg,
                "<g transform=\"translate(0,{offset})\"><line x1=\"-30\" y1=\"5\" x2=\"-5\" y2=\"5\" stroke=\"{color}\" stroke-width=\"3\"/><text x=\"0\" y=\"9\">{label}</text></g>"
            );
        }
        svg.push_str("</g>\n");
    }
}

impl Default for SvgChart {
    fn default() -> Self {
        Self::new(640.0, 320.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::visualization::ChartPoint;

    fn chart() -> ProgressionChart {
        ProgressionChart {
            points: vec![
                ChartPoint {
                    semester: 1,
                    label: "Sem 1".to_string(),
                    gpa: 4.0,
                    cgpa: 4.0,
                },
                ChartPoint {
                    semester: 2,
                    label: "Sem 2".to_string(),
                    gpa: 1.0,
                    cgpa: 2.5,
                },
            ],
        }
    }

    #[test]
    fn test_scales() {
        // Plot area 200 x 100
        let svg = SvgChart::new(280.0, 160.0);
        assert!((svg.x(0, 2) - 50.0).abs() < 1e-9);
        assert!((svg.x(1, 2) - 150.0).abs() < 1e-9);
        assert!((svg.y(4.0) - 0.0).abs() < 1e-9);
        assert!((svg.y(0.0) - 100.0).abs() < 1e-9);
        assert!((svg.y(2.0) - 50.0).abs() < 1e-9);
        // Out-of-range values are clamped to the axis
        assert!((svg.y(5.0) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_render_contains_both_series() {
        let out = SvgChart::new(280.0, 160.0).render(&chart());

        assert!(out.starts_with("<svg"));
        assert!(out.contains("chart-line cgpa"));
        assert!(out.contains("chart-line gpa"));
        assert!(out.contains("points=\"50.0,0.0 150.0,37.5\""));
        assert!(out.contains("points=\"50.0,0.0 150.0,75.0\""));
        assert!(out.contains(">Sem 2</text>"));
        assert!(out.contains("Semester 2: CGPA 2.50, GPA 1.00"));
        assert_eq!(out.matches("<circle").count(), 4);
        assert!(out.contains(">CGPA</text>"));
    }

    #[test]
    fn test_empty_chart_renders_nothing() {
        assert!(SvgChart::default().render(&ProgressionChart::default()).is_empty());
    }
}
