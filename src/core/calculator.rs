//! Semester GPA and cumulative CGPA calculation
//!
//! Single pass over the semesters in input order. Running totals stay at full
//! precision; only the values stored for display are rounded, so per-semester
//! rounding never leaks into the CGPA trajectory.

use crate::core::error::CalcError;
use crate::core::grading::{GradingCatalog, GradingSystem};
use crate::core::models::{GpaSummary, GradeBook, SemesterResult, SubjectEntry, SubjectResult};
use crate::{debug, warn};

/// Decimal places used for every displayed GPA/CGPA
pub const DISPLAY_DECIMALS: i32 = 2;

/// Round half away from zero to `decimals` places
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Weighted average, 0 when there is no weight
fn weighted_average(points: f64, credits: f64) -> f64 {
    if credits > 0.0 {
        points / credits
    } else {
        0.0
    }
}

/// Validate one row; `None` means the row is skipped
fn process_subject(
    entry: &SubjectEntry,
    system: &GradingSystem,
    semester: usize,
) -> Option<SubjectResult> {
    if !entry.is_complete() {
        debug!("Skipping incomplete subject row in semester {semester}");
        return None;
    }

    let code = entry.code.trim();
    let Some(credits) = entry.parsed_credits() else {
        warn!(
            "Invalid credits value for subject {code}: '{}'",
            entry.credits.trim()
        );
        return None;
    };

    Some(SubjectResult {
        code: code.to_string(),
        name: entry.name.trim().to_string(),
        grade: entry.grade.trim().to_string(),
        credits,
        point: system.grade_point(&entry.grade),
    })
}

/// Compute per-semester GPA, running CGPA and the final CGPA
///
/// Unknown `system_id` values fall back to the catalog default. Semesters
/// without any valid subject are left out of the result but keep the
/// positions of later semesters intact.
#[must_use]
pub fn compute_results(
    catalog: &GradingCatalog,
    system_id: &str,
    semesters: &[Vec<SubjectEntry>],
) -> GpaSummary {
    let system = catalog.resolve(system_id);
    if system.id != system_id {
        debug!(
            "Unknown grading system '{system_id}', using '{}'",
            system.id
        );
    }

    let mut total_points = 0.0;
    let mut total_credits = 0.0;
    let mut results = Vec::new();

    for (idx, rows) in semesters.iter().enumerate() {
        let index = idx + 1;
        let mut sem_points = 0.0;
        let mut sem_credits = 0.0;
        let mut subjects = Vec::new();

        for subject in rows
            .iter()
            .filter_map(|row| process_subject(row, system, index))
        {
            sem_points += subject.point * subject.credits;
            sem_credits += subject.credits;
            subjects.push(subject);
        }

        let gpa = weighted_average(sem_points, sem_credits);
        total_points += sem_points;
        total_credits += sem_credits;
        let cgpa = weighted_average(total_points, total_credits);

        if subjects.is_empty() {
            debug!("Semester {index} has no valid subjects; omitted from results");
            continue;
        }

        results.push(SemesterResult {
            index,
            subjects,
            gpa: round_to(gpa, DISPLAY_DECIMALS),
            total_credits: sem_credits,
            grade_points: sem_points,
            cumulative_cgpa: round_to(cgpa, DISPLAY_DECIMALS),
        });
    }

    GpaSummary {
        system_id: system.id.clone(),
        system_name: system.name.clone(),
        semesters: results,
        total_points,
        total_credits,
        cgpa: round_to(
            weighted_average(total_points, total_credits),
            DISPLAY_DECIMALS,
        ),
    }
}

/// Calculate results for a grade book, rejecting input with nothing valid
///
/// # Errors
/// Returns [`CalcError::NoValidSubjects`] if no semester has a valid subject.
pub fn calculate(catalog: &GradingCatalog, book: &GradeBook) -> Result<GpaSummary, CalcError> {
    let summary = compute_results(catalog, &book.system, &book.semesters);
    if summary.is_empty() {
        return Err(CalcError::NoValidSubjects);
    }
    Ok(summary)
}
