//! End-to-end tests: edit a grade book, persist it on disk, calculate and report.

use gpa_calc::calculator::calculate;
use gpa_calc::error::CalcError;
use gpa_calc::grading::GradingCatalog;
use gpa_calc::models::{SubjectEntry, SubjectPatch};
use gpa_calc::report::{formats::ReportFormat, ReportContext};
use gpa_calc::storage::{FileStore, StateRepository, STATE_KEY};
use std::fs;
use tempfile::TempDir;

fn repository(dir: &TempDir) -> StateRepository<FileStore> {
    StateRepository::new(FileStore::new(dir.path()), "AUS")
}

#[test]
fn edits_survive_a_reload_from_disk() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let mut repo = repository(&dir);
    let mut book = repo.load();
    assert_eq!(book.semester_count(), 1);

    book.update_subject(
        1,
        1,
        SubjectPatch {
            code: Some("FIT1045".to_string()),
            name: Some("Algorithms".to_string()),
            credits: Some("10".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    let second = book.add_semester();
    book.add_subject(second, SubjectEntry::new("FIT2004", "Data Structures", "P", "10"))
        .unwrap();
    repo.save(&book).unwrap();

    assert!(dir.path().join(format!("{STATE_KEY}.json")).exists());

    let reloaded = repository(&dir).load();
    assert_eq!(reloaded, book);

    let summary = calculate(&GradingCatalog::builtin(), &reloaded).unwrap();
    assert_eq!(summary.semesters.len(), 2);
    assert!((summary.semesters[0].gpa - 4.0).abs() < 1e-9);
    assert!((summary.semesters[1].gpa - 1.0).abs() < 1e-9);
    assert!((summary.cgpa - 2.5).abs() < 1e-9);
}

#[test]
fn malformed_file_is_replaced_by_default_book() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(format!("{STATE_KEY}.json"));
    fs::write(&path, "{ this is not json").unwrap();

    let book = repository(&dir).load();

    assert_eq!(book.system, "AUS");
    assert_eq!(book.semester_count(), 1);
    assert!(!path.exists());
}

#[test]
fn legacy_numeric_credits_are_accepted() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        dir.path().join(format!("{STATE_KEY}.json")),
        r#"{"system":"MY","semesters":[[{"code":"A1","name":"Alpha","grade":"D","credits":12},{"code":"B2","name":"Beta","grade":"C","credits":"6"}]]}"#,
    )
    .unwrap();

    let book = repository(&dir).load();
    let summary = calculate(&GradingCatalog::builtin(), &book).unwrap();

    assert_eq!(book.semesters[0][0].credits, "12");
    assert!((summary.cgpa - 3.45).abs() < 1e-9);
}

#[test]
fn removing_a_semester_renumbers_results() {
    let mut book = gpa_calc::models::GradeBook::new("AUS");
    book.add_subject(1, SubjectEntry::new("A", "First", "HD", "6"))
        .unwrap();
    book.add_semester();
    book.add_subject(2, SubjectEntry::new("B", "Second", "C", "6"))
        .unwrap();
    book.add_semester();
    book.add_subject(3, SubjectEntry::new("C", "Third", "P", "6"))
        .unwrap();

    book.remove_semester(2).unwrap();

    assert_eq!(book.semester_labels(), vec!["Semester 1", "Semester 2"]);
    let summary = calculate(&GradingCatalog::builtin(), &book).unwrap();
    assert_eq!(summary.semesters[1].index, 2);
    assert_eq!(summary.semesters[1].subjects[0].code, "C");
}

#[test]
fn blank_book_has_nothing_to_calculate() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let book = repository(&dir).load();

    assert_eq!(
        calculate(&GradingCatalog::builtin(), &book),
        Err(CalcError::NoValidSubjects)
    );
}

#[test]
fn reports_are_written_in_both_formats() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut book = gpa_calc::models::GradeBook::new("AUS");
    book.update_subject(
        1,
        1,
        SubjectPatch {
            code: Some("FIT1045".to_string()),
            name: Some("Algorithms & <Logic>".to_string()),
            credits: Some("6".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    let summary = calculate(&GradingCatalog::builtin(), &book).unwrap();
    let ctx = ReportContext::new(&summary);

    for format in [ReportFormat::Html, ReportFormat::Markdown] {
        let path = dir.path().join(format!("report.{}", format.extension()));
        format.reporter().generate(&ctx, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("FIT1045"));
        assert!(content.contains("4.00"));
        assert!(content.contains("Algorithms &amp; &lt;Logic&gt;"));
    }
}

#[test]
fn custom_systems_file_extends_catalog() {
    let mut catalog = GradingCatalog::builtin();
    catalog
        .extend_from_toml(
            r#"
[[systems]]
id = "US"
name = "United States"
grades = [["A", 4.0], ["B", 3.0], ["C", 2.0], ["D", 1.0], ["F", 0.0]]
"#,
        )
        .unwrap();

    let mut book = gpa_calc::models::GradeBook::new("US");
    book.update_subject(
        1,
        1,
        SubjectPatch {
            code: Some("CS101".to_string()),
            name: Some("Intro".to_string()),
            grade: Some("B".to_string()),
            credits: Some("3".to_string()),
        },
    )
    .unwrap();

    let summary = calculate(&catalog, &book).unwrap();
    assert_eq!(summary.system_name, "United States");
    assert!((summary.cgpa - 3.0).abs() < 1e-9);
}

#[test]
fn out_of_range_custom_points_are_rejected() {
    let mut catalog = GradingCatalog::builtin();
    let result = catalog.extend_from_toml(
        r#"
[[systems]]
id = "X"
grades = [["A+", 4.3]]
"#,
    );

    assert!(result.is_err());
    assert!(!catalog.contains("X"));
}
