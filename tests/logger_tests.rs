//! Integration tests for logger behavior.

use academic_planner::logger::{init_file_logging, level, set_level, set_level_from_str, Level};
use academic_planner::{debug, error, info, warn};
use std::fs;
use tempfile::TempDir;

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("WARN"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn level_ordering_matches_severity() {
    assert!(Level::Error < Level::Warn);
    assert!(Level::Info < Level::Debug);
    assert_eq!("debug".parse::<Level>(), Ok(Level::Debug));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
    assert!(level() >= Level::Error);
}

#[test]
fn file_logging_writes_tagged_lines() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("logs").join("acadplan.log");

    assert!(init_file_logging(&path));
    error!("seed failed to load: {}", "missing.toml");

    let content = fs::read_to_string(&path).expect("Log file should exist");
    assert!(content.contains("seed failed to load: missing.toml"));
}
