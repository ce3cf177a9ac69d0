//! Calculate command handler
//!
//! Prints per-semester results, the running CGPA and the final CGPA.

use super::Workspace;
use gpa_calc::calculator::calculate;
use gpa_calc::models::GpaSummary;
use gpa_calc::report::{format_credits, format_point, MermaidGenerator, ProgressionChart};
use gpa_calc::{info, verbose};

/// Run the calculate command
pub fn run(workspace: &mut Workspace, chart: bool) {
    let book = workspace.load();

    let summary = match calculate(&workspace.catalog, &book) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("⚠ {e}");
            std::process::exit(1);
        }
    };

    info!(
        "Calculated {} semester(s), {} subject(s)",
        summary.semesters.len(),
        summary.subject_count()
    );
    print_summary(&summary);

    if chart {
        let chart = ProgressionChart::from_summary(&summary);
        verbose!("Chart categories: {}", chart.labels().collect::<Vec<_>>().join(", "));
        println!("\n{}", MermaidGenerator::progression_chart(&chart));
    }
}

fn print_summary(summary: &GpaSummary) {
    println!("\n=== Results ({}) ===", summary.system_name);

    for sem in &summary.semesters {
        println!(
            "\nSemester {:<34} GPA: {}",
            sem.index,
            format_point(sem.gpa)
        );
        println!(
            "  {:<10} {:<28} {:<6} {:>7} {:>6}",
            "Code", "Name", "Grade", "Credits", "Point"
        );
        for subject in &sem.subjects {
            println!(
                "  {:<10} {:<28} {:<6} {:>7} {:>6}",
                subject.code,
                subject.name,
                subject.grade,
                format_credits(subject.credits),
                format_point(subject.point)
            );
        }
        println!(
            "  {} credits, CGPA after this semester: {}",
            format_credits(sem.total_credits),
            format_point(sem.cumulative_cgpa)
        );
    }

    println!(
        "\nFinal CGPA: {} ({} credits)",
        format_point(summary.cgpa),
        format_credits(summary.total_credits)
    );
}
