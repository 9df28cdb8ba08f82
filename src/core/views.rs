//! Plain-text renderings of the store, shared by the CLI subcommands and the
//! session interpreter.

use crate::core::catalog::{self, CourseQuery};
use crate::core::planner;
use crate::core::progress::{self, DashboardSummary};
use crate::core::store::AppState;
use crate::core::transcript;
use std::fmt::Write;

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

/// Catalog entries matching `query`, one block per course
#[must_use]
pub fn catalog_listing(state: &AppState, query: &CourseQuery) -> String {
    let found = catalog::search(&state.courses, query);
    let mut out = String::new();
    for course in &found {
        let offered: Vec<String> = course.semester.iter().map(ToString::to_string).collect();
        let _ = writeln!(
            out,
            "{:<12} {} ({} cr, {})",
            course.code, course.title, course.credits, course.level
        );
        let _ = writeln!(
            out,
            "             id: {} | {} | prereqs: {} | offered: {}",
            course.id,
            course.college,
            course.prerequisites_label(),
            list_or_none(&offered)
        );
    }
    let _ = write!(out, "{} of {} courses", found.len(), state.courses.len());
    out
}

/// Requirement progress grouped by type
#[must_use]
pub fn requirements_listing(state: &AppState) -> String {
    let mut out = String::new();
    for group in progress::group_by_type(&state.degree_requirements) {
        let _ = writeln!(
            out,
            "{} ({}/{} credits, {:.0}%)",
            group.kind.label(),
            group.credits_completed(),
            group.credits_required(),
            group.percentage()
        );
        for req in &group.requirements {
            let _ = writeln!(
                out,
                "  {:<40} {:>3}/{:<3} {:>4.0}%  {}",
                req.name,
                req.credits_completed,
                req.credits_required,
                progress::requirement_progress(req),
                progress::requirement_status(req)
            );
        }
    }
    if out.is_empty() {
        out.push_str("No degree requirements");
    }
    out.trim_end().to_string()
}

/// Headline progress figures
#[must_use]
pub fn dashboard(state: &AppState) -> String {
    let summary = DashboardSummary::compute(&state.user, &state.degree_requirements);
    format!(
        "Degree progress:        {:.1}%\n\
         Credits remaining:      {}\n\
         Requirements completed: {}/{}\n\
         GPA:                    {:.2}\n\
         Expected graduation:    {}",
        summary.progress_percentage,
        summary.remaining_credits,
        summary.completed_requirements,
        summary.total_requirements,
        summary.gpa,
        summary.expected_graduation
    )
}

/// Transcript grouped by semester, newest first, with GPA figures
#[must_use]
pub fn transcript_listing(state: &AppState) -> String {
    let mut out = String::new();
    for semester in transcript::by_semester(&state.completed_courses) {
        let _ = writeln!(
            out,
            "{} (GPA {:.2}, {} credits)",
            semester.key(),
            semester.gpa(),
            semester.credits()
        );
        for course in &semester.courses {
            let _ = writeln!(
                out,
                "  {:<12} {:<40} {:>2} cr  {:<2} ({:.1})",
                course.code, course.title, course.credits, course.grade, course.gpa
            );
        }
    }
    let _ = write!(out, "{}", gpa_line(state));
    out
}

/// Overall transcript GPA and credit total
#[must_use]
pub fn gpa_line(state: &AppState) -> String {
    format!(
        "Overall GPA: {:.2} over {} credits",
        transcript::overall_gpa(&state.completed_courses),
        transcript::total_credits(&state.completed_courses)
    )
}

/// Planning grid for `years` academic years from the fall of `start_year`,
/// followed by any planned slots outside that window
#[must_use]
pub fn planning_grid(state: &AppState, start_year: i32, years: u32) -> String {
    let grid = planner::planning_grid(state, start_year, years);
    let mut out = String::new();
    for semester in &grid {
        let _ = writeln!(
            out,
            "{:<12} [{}] {} credits",
            semester.label(),
            semester.slot,
            semester.credits()
        );
        for course in semester.courses {
            let _ = writeln!(out, "  {} {} ({} cr)", course.code, course.title, course.credits);
        }
    }

    let outside: Vec<_> = planner::planned_semesters(state)
        .into_iter()
        .filter(|s| !s.courses.is_empty() && !grid.iter().any(|g| g.slot == s.slot))
        .collect();
    if !outside.is_empty() {
        out.push_str("Outside the grid:\n");
        for semester in &outside {
            let _ = writeln!(
                out,
                "{:<12} [{}] {} credits",
                semester.label(),
                semester.slot,
                semester.credits()
            );
        }
    }
    let _ = write!(
        out,
        "Total planned: {} credits",
        planner::total_planned_credits(state)
    );
    out
}

/// Profile fields
#[must_use]
pub fn profile(state: &AppState) -> String {
    let user = &state.user;
    format!(
        "Name:                {}\n\
         Email:               {}\n\
         Major:               {}\n\
         Threads:             {}\n\
         Minors:              {}\n\
         Expected graduation: {}\n\
         Credits:             {}/{}\n\
         GPA:                 {:.2}",
        user.name,
        user.email,
        user.major,
        list_or_none(&user.threads),
        list_or_none(&user.minors),
        user.expected_graduation,
        user.completed_credits,
        user.total_credits,
        user.gpa
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::NewCompletedCourse;
    use crate::core::seed::SeedData;

    #[test]
    fn test_catalog_listing_counts_matches() {
        let store = SeedData::sample().into_store();
        let text = catalog_listing(store.state(), &CourseQuery::text("intro"));
        assert!(text.contains("CS 1301"));
        assert!(text.contains("PHYS 2211"));
        assert!(text.ends_with("of 8 courses"));
    }

    #[test]
    fn test_requirements_listing_groups() {
        let store = SeedData::sample().into_store();
        let text = requirements_listing(store.state());
        let core = text.find("Core Requirements").unwrap();
        let major = text.find("Major Requirements").unwrap();
        assert!(core < major);
        assert!(text.contains("not-started"));
    }

    #[test]
    fn test_dashboard_uses_profile_figures() {
        let store = SeedData::sample().into_store();
        let text = dashboard(store.state());
        assert!(text.contains("35.7%"));
        assert!(text.contains("Credits remaining:      81"));
        assert!(text.contains("3.67"));
    }

    #[test]
    fn test_transcript_listing() {
        let mut store = SeedData::sample().into_store();
        store
            .add_completed_course(NewCompletedCourse::new(
                "CS 1301", "Intro", 4, "B+", "Fall", 2024,
            ))
            .unwrap();
        let text = transcript_listing(store.state());
        assert!(text.starts_with("Fall 2024 (GPA 3.30, 4 credits)"));
        assert!(text.ends_with("Overall GPA: 3.30 over 4 credits"));
    }

    #[test]
    fn test_grid_lists_out_of_window_slots() {
        let mut store = SeedData::sample().into_store();
        let cs = store.state().course("cs1301").unwrap().clone();
        store.plan_course("fall-2040", cs).unwrap();
        let text = planning_grid(store.state(), 2025, 1);
        assert!(text.contains("[fall-2025] 0 credits"));
        assert!(text.contains("Outside the grid:"));
        assert!(text.contains("[fall-2040] 3 credits"));
    }
}
