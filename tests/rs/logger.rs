//! Integration tests for logger behavior.

use gpa_calc::logger::{init_file_logging, set_level, set_level_from_str, Level};
use gpa_calc::{debug, error, info, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[test]
#[cfg(feature = "file-logging")]
fn file_logging_creates_parent_directories() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("gpacalc.log");

    assert!(init_file_logging(&path));
    assert!(path.exists());
}
