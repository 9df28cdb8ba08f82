//! Integration tests for scripted planning sessions

use academic_planner::core::seed::SeedData;
use academic_planner::core::session::{RunSummary, Session};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn session(reports_dir: PathBuf) -> Session {
    Session::new(SeedData::sample().into_store(), 2025, 2, reports_dir)
}

fn run_script(session: &mut Session, script: &str) -> (RunSummary, String) {
    let mut out = Vec::new();
    let summary = session
        .run(script.as_bytes(), &mut out, "")
        .expect("Session I/O failed");
    (summary, String::from_utf8(out).expect("Output should be UTF-8"))
}

#[test]
fn test_full_planning_script() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut session = session(temp_dir.path().to_path_buf());

    let script = r#"
# Record last year's courses
add "CS 1301" 4 B+ Fall 2024 Introduction to Computing
add "MATH 1551" 2 A Spring 2025 Differential Calculus
gpa

# Plan the coming fall
plan fall-2025 cs1331
plan fall-2025 math1552
plan spring-2026 cs1332
unplan spring-2026 cs1332
grid

set expected_graduation Fall 2027
set threads Theory, Devices
report md
"#;
    let (summary, output) = run_script(&mut session, script);

    assert_eq!(summary, RunSummary { commands: 11, errors: 0 });
    assert!(output.contains("as completed-1"));
    assert!(output.contains("as completed-2"));
    assert!(output.contains("Overall GPA: 3.53 over 6 credits"));
    assert!(output.contains("Fall 2025    [fall-2025] 7 credits"));
    assert!(output.contains("Spring 2026  [spring-2026] 0 credits"));

    let state = session.store().state();
    assert_eq!(state.user.expected_graduation, "Fall 2027");
    assert_eq!(state.user.threads, vec!["Theory", "Devices"]);
    assert_eq!(state.completed_courses.len(), 2);

    let report = temp_dir.path().join("progress_report.md");
    let content = fs::read_to_string(report).expect("Report should be written");
    assert!(content.contains("Fall 2027"));
    assert!(content.contains("### Spring 2025 (GPA 4.00, 2 credits)"));
    assert!(content.contains("| CS 1331 | Introduction to Object-Oriented Programming | 3 |"));
}

#[test]
fn test_errors_are_reported_and_session_continues() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut session = session(temp_dir.path().to_path_buf());

    let script = "\
add CS1301 4 Z Fall 2024 Intro
add CS1301 -1 A Fall 2024 Intro
plan Fall-2025 cs1301
plan fall-2025 cs0000
bogus
add CS1301 4 A Fall 2024 Intro
";
    let (summary, output) = run_script(&mut session, script);

    assert_eq!(summary, RunSummary { commands: 6, errors: 5 });
    assert!(output.contains("✗ invalid grade"));
    assert!(output.contains("✗ unknown command 'bogus'"));
    // Only the last command changed the store, and it got the first id
    assert!(output.contains("as completed-1"));
    assert!(session.store().state().planned_courses.is_empty());
}

#[test]
fn test_quit_stops_reading() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut session = session(temp_dir.path().to_path_buf());

    let (summary, _) = run_script(&mut session, "exit\nadd CS1301 4 A Fall 2024 Intro\n");
    assert_eq!(summary.commands, 1);
    assert!(session.store().state().completed_courses.is_empty());
}

#[test]
fn test_report_to_explicit_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut session = session(temp_dir.path().join("unused"));
    let target = temp_dir.path().join("out").join("me.html");

    let script = format!("report html \"{}\"\n", target.display());
    let (summary, output) = run_script(&mut session, &script);

    assert_eq!(summary.errors, 0, "{output}");
    assert!(target.exists());
    assert!(!temp_dir.path().join("unused").exists());
}
