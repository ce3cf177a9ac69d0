//! Report command handler
//!
//! Generates GPA reports (Markdown, HTML) with a per-semester breakdown and
//! a progression chart.

use super::Workspace;
use gpa_calc::calculator::calculate;
use gpa_calc::config::Config;
use gpa_calc::report::{formats::ReportFormat, ReportContext};
use gpa_calc::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File stem used when no output path is given
const DEFAULT_REPORT_NAME: &str = "gpa_report";

/// Run the report command.
///
/// # Arguments
/// * `workspace` - Grading catalog and stored grade book
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html)
/// * `config` - Configuration containing default output directory
pub fn run(workspace: &mut Workspace, output_file: Option<&Path>, format_str: &str, config: &Config) {
    if let Err(err) = generate_report(workspace, output_file, format_str, config) {
        error!("Report generation failed: {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn generate_report(
    workspace: &mut Workspace,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<(), String> {
    let format =
        ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    let book = workspace.load();
    let summary = calculate(&workspace.catalog, &book).map_err(|e| format!("⚠ {e}"))?;

    let final_output_path: PathBuf = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        reports_dir.join(format!("{DEFAULT_REPORT_NAME}.{}", format.extension()))
    };

    if let Some(parent) = final_output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                format!(
                    "✗ Failed to create reports directory {}: {e}",
                    parent.display()
                )
            })?;
        }
    }

    let ctx = ReportContext::new(&summary);
    format
        .reporter()
        .generate(&ctx, &final_output_path)
        .map_err(|e| format!("✗ Failed to generate {format} report: {e}"))?;

    println!("✓ Report generated: {}", final_output_path.display());
    info!("Report exported to: {}", final_output_path.display());

    println!("\n=== Summary ===");
    println!("Grading system: {}", summary.system_name);
    println!("Semesters: {}", summary.semesters.len());
    println!("Subjects: {}", summary.subject_count());
    println!("Final CGPA: {}", ctx.final_cgpa());

    Ok(())
}
