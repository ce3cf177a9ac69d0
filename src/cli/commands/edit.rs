//! Grade book editing handlers
//!
//! Every successful edit is saved immediately.

use super::{confirm, Workspace};
use crate::args::{SemesterSubcommand, SubjectSubcommand};
use gpa_calc::error::EditError;
use gpa_calc::info;
use gpa_calc::models::{GradeBook, SubjectEntry};

/// Print every grading system and its grade table
pub fn list_systems(workspace: &Workspace) {
    println!("\n=== Grading Systems ===\n");
    let default_id = &workspace.catalog.default_system().id;
    for system in workspace.catalog.systems() {
        let marker = if &system.id == default_id {
            " (default)"
        } else {
            ""
        };
        println!("{} - {}{marker}", system.id, system.name);
        for (grade, point) in system.grades() {
            println!("  {grade:<6} {point:.2}");
        }
    }
}

/// Show or change the grading system of the grade book
pub fn system(workspace: &mut Workspace, id: Option<&str>) {
    let mut book = workspace.load();

    let Some(id) = id else {
        let current = workspace.catalog.resolve(&book.system);
        println!("{} - {}", current.id, current.name);
        return;
    };

    let id = id.trim();
    if !workspace.catalog.contains(id) {
        fail(&EditError::UnknownSystem(id.to_string()));
    }

    book.set_system(id);
    workspace.save(&book);
    info!("Grading system set to {id}");
    println!("✓ Grading system set to {id}");
}

/// Handle `semester add` and `semester remove`
pub fn semester(workspace: &mut Workspace, subcommand: SemesterSubcommand) {
    let mut book = workspace.load();

    match subcommand {
        SemesterSubcommand::Add => {
            let number = book.add_semester();
            workspace.save(&book);
            println!("✓ Added Semester {number}");
        }
        SemesterSubcommand::Remove { number, yes } => {
            if let Err(e) = book.semester(number) {
                fail(&e);
            }
            if !yes && !confirm(&format!("Remove Semester {number} and all its subjects?")) {
                println!("✗ Removal cancelled");
                return;
            }
            match book.remove_semester(number) {
                Ok(rows) => {
                    workspace.save(&book);
                    info!("Removed semester {number} ({} row(s))", rows.len());
                    println!("✓ Removed Semester {number}");
                }
                Err(e) => fail(&e),
            }
        }
    }
}

/// Handle `subject add`, `subject remove` and `subject set`
pub fn subject(workspace: &mut Workspace, subcommand: SubjectSubcommand) {
    let mut book = workspace.load();
    let patch = subcommand.patch();

    match subcommand {
        SubjectSubcommand::Add {
            semester,
            code,
            name,
            grade,
            credits,
        } => {
            let grade = grade.trim().to_string();
            warn_unknown_grade(workspace, &book, &grade);
            match book.add_subject(semester, SubjectEntry::new(code, name, grade, credits)) {
                Ok(row) => {
                    workspace.save(&book);
                    println!("✓ Added subject row {row} to Semester {semester}");
                }
                Err(e) => fail(&e),
            }
        }
        SubjectSubcommand::Remove { semester, row } => match book.remove_subject(semester, row) {
            Ok(entry) => {
                workspace.save(&book);
                let label = if entry.code.trim().is_empty() {
                    format!("row {row}")
                } else {
                    entry.code
                };
                println!("✓ Removed {label} from Semester {semester}");
            }
            Err(e) => fail(&e),
        },
        SubjectSubcommand::Set { semester, row, .. } => {
            let Some(mut patch) = patch.filter(|p| !p.is_empty()) else {
                eprintln!("Nothing to change: pass at least one of --code, --name, --grade, --credits");
                std::process::exit(1);
            };
            if let Some(grade) = patch.grade.as_mut() {
                *grade = grade.trim().to_string();
                warn_unknown_grade(workspace, &book, grade);
            }
            match book.update_subject(semester, row, patch) {
                Ok(_) => {
                    workspace.save(&book);
                    println!("✓ Updated row {row} of Semester {semester}");
                }
                Err(e) => fail(&e),
            }
        }
    }
}

/// Print all semesters and their rows as entered
pub fn show(workspace: &mut Workspace) {
    let book = workspace.load();
    let system = workspace.catalog.resolve(&book.system);

    println!("\nGrading system: {} ({})", system.name, system.id);
    for (label, rows) in book.semester_labels().iter().zip(&book.semesters) {
        println!("\n{label}");
        println!(
            "  {:>3}  {:<10} {:<28} {:<6} {:>7}",
            "#", "Code", "Name", "Grade", "Credits"
        );
        for (i, entry) in rows.iter().enumerate() {
            println!(
                "  {:>3}  {:<10} {:<28} {:<6} {:>7}",
                i + 1,
                entry.code,
                entry.name,
                entry.grade,
                entry.credits
            );
        }
    }
}

/// Reset the grade book to its default state
pub fn clear(workspace: &mut Workspace, yes: bool) {
    if !yes && !confirm("Are you sure you want to clear all data?") {
        println!("✗ Clear cancelled");
        return;
    }
    let book = workspace.reset();
    info!("Grade book cleared");
    println!(
        "✓ Cleared all data ({} semester(s) remain)",
        book.semester_count()
    );
}

fn warn_unknown_grade(workspace: &Workspace, book: &GradeBook, grade: &str) {
    let system = workspace.catalog.resolve(&book.system);
    if system.point(grade).is_none() {
        let valid: Vec<&str> = system.grade_names().collect();
        eprintln!(
            "⚠ Grade '{grade}' is not part of {} ({}); it counts as 0.00",
            system.name,
            valid.join(", ")
        );
    }
}

fn fail(err: &EditError) -> ! {
    eprintln!("✗ {err}");
    std::process::exit(1);
}
