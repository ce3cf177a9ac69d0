//! Integration smoke tests for `gpa_calc`

use gpa_calc::get_version;
use gpa_calc::grading::GradingCatalog;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn builtin_catalog_has_both_systems() {
    let catalog = GradingCatalog::builtin();
    assert_eq!(catalog.default_system().id, "AUS");
    assert!(catalog.contains("MY"));
}
