//! Progress report generation
//!
//! Renders a snapshot of the planning store (profile, degree progress,
//! requirements, transcript, planned semesters) as Markdown or HTML.

pub mod formats;

use crate::core::planner::planned_semesters;
use crate::core::progress::{self, DashboardSummary};
use crate::core::store::AppState;
use crate::core::transcript;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// File stem of reports written without an explicit path
pub const DEFAULT_REPORT_STEM: &str = "progress_report";

/// Output path used when none is given: `<reports_dir>/progress_report.<ext>`
#[must_use]
pub fn default_report_path(reports_dir: &Path, format: ReportFormat) -> PathBuf {
    reports_dir.join(format!("{DEFAULT_REPORT_STEM}.{}", format.extension()))
}

/// One requirement line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementRow {
    /// Requirement name
    pub name: String,
    /// Credits required
    pub required: u32,
    /// Credits completed
    pub completed: u32,
    /// Progress percentage, rounded to a whole number
    pub percentage: String,
    /// Status name (e.g., "in-progress")
    pub status: String,
    /// Required courses, comma separated
    pub courses: String,
    /// Alternative courses, comma separated (empty if none)
    pub options: String,
}

/// Requirements of one type with group totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementGroupRow {
    /// Section heading (e.g., "Core Requirements")
    pub label: String,
    /// Sum of credits required
    pub required: u32,
    /// Sum of credits completed
    pub completed: u32,
    /// Group percentage, rounded to a whole number
    pub percentage: String,
    /// Requirements in the group
    pub rows: Vec<RequirementRow>,
}

/// One completed course line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptRow {
    /// Course code
    pub code: String,
    /// Course title
    pub title: String,
    /// Credits
    pub credits: u32,
    /// Letter grade
    pub grade: String,
    /// Grade points, one decimal
    pub points: String,
}

/// A transcript semester
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterRow {
    /// Heading (e.g., "Fall 2024")
    pub label: String,
    /// Semester GPA, two decimals
    pub gpa: String,
    /// Credits taken
    pub credits: u64,
    /// Courses taken
    pub courses: Vec<TranscriptRow>,
}

/// One planned course line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCourseRow {
    /// Course code
    pub code: String,
    /// Course title
    pub title: String,
    /// Credits
    pub credits: u32,
}

/// A planned semester slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedSemesterRow {
    /// Heading (e.g., "Spring 2026")
    pub label: String,
    /// Slot id (e.g., "spring-2026")
    pub slot: String,
    /// Credits planned
    pub credits: u64,
    /// Planned courses
    pub courses: Vec<PlannedCourseRow>,
}

/// Everything a report template displays, already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    /// Generation timestamp
    pub generated: String,
    /// Student name
    pub student_name: String,
    /// Email
    pub email: String,
    /// Major
    pub major: String,
    /// Threads, comma separated ("None" if empty)
    pub threads: String,
    /// Minors, comma separated ("None" if empty)
    pub minors: String,
    /// Expected graduation term
    pub expected_graduation: String,
    /// Overall degree progress, one decimal
    pub progress: String,
    /// Credits left to graduate
    pub remaining_credits: u32,
    /// Credits completed per the profile
    pub completed_credits: u32,
    /// Credits required to graduate
    pub total_credits: u32,
    /// Requirements satisfied
    pub completed_requirements: usize,
    /// Requirements in total
    pub total_requirements: usize,
    /// Profile GPA, two decimals
    pub profile_gpa: String,
    /// GPA computed from the transcript, two decimals
    pub transcript_gpa: String,
    /// Credits on the transcript
    pub transcript_credits: u64,
    /// Requirement sections
    pub requirement_groups: Vec<RequirementGroupRow>,
    /// Transcript semesters, newest first
    pub semesters: Vec<SemesterRow>,
    /// Planned semesters with at least one course, chronological
    pub planned: Vec<PlannedSemesterRow>,
    /// Credits planned across all slots
    pub planned_credits: u64,
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

impl ReportContext {
    /// Build the report data from a state snapshot
    #[must_use]
    pub fn from_state(state: &AppState) -> Self {
        let user = &state.user;
        let summary = DashboardSummary::compute(user, &state.degree_requirements);

        let requirement_groups = progress::group_by_type(&state.degree_requirements)
            .iter()
            .map(|group| RequirementGroupRow {
                label: group.kind.label().to_string(),
                required: group.credits_required(),
                completed: group.credits_completed(),
                percentage: format!("{:.0}", group.percentage()),
                rows: group
                    .requirements
                    .iter()
                    .map(|req| RequirementRow {
                        name: req.name.clone(),
                        required: req.credits_required,
                        completed: req.credits_completed,
                        percentage: format!("{:.0}", progress::requirement_progress(req)),
                        status: progress::requirement_status(req).to_string(),
                        courses: req.courses.join(", "),
                        options: req
                            .flexible_options
                            .as_ref()
                            .map(|o| o.join(", "))
                            .unwrap_or_default(),
                    })
                    .collect(),
            })
            .collect();

        let semesters = transcript::by_semester(&state.completed_courses)
            .iter()
            .map(|semester| SemesterRow {
                label: semester.key(),
                gpa: format!("{:.2}", semester.gpa()),
                credits: semester.credits(),
                courses: semester
                    .courses
                    .iter()
                    .map(|c| TranscriptRow {
                        code: c.code.clone(),
                        title: c.title.clone(),
                        credits: c.credits,
                        grade: c.grade.to_string(),
                        points: format!("{:.1}", c.gpa),
                    })
                    .collect(),
            })
            .collect();

        let planned = planned_semesters(state)
            .iter()
            .filter(|semester| !semester.courses.is_empty())
            .map(|semester| PlannedSemesterRow {
                label: semester.label(),
                slot: semester.slot.to_string(),
                credits: semester.credits(),
                courses: semester
                    .courses
                    .iter()
                    .map(|c| PlannedCourseRow {
                        code: c.code.clone(),
                        title: c.title.clone(),
                        credits: c.credits,
                    })
                    .collect(),
            })
            .collect();

        Self {
            generated: chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
            student_name: user.name.clone(),
            email: user.email.clone(),
            major: user.major.clone(),
            threads: join_or_none(&user.threads),
            minors: join_or_none(&user.minors),
            expected_graduation: user.expected_graduation.clone(),
            progress: format!("{:.1}", summary.progress_percentage),
            remaining_credits: summary.remaining_credits,
            completed_credits: user.completed_credits,
            total_credits: user.total_credits,
            completed_requirements: summary.completed_requirements,
            total_requirements: summary.total_requirements,
            profile_gpa: format!("{:.2}", summary.gpa),
            transcript_gpa: format!("{:.2}", transcript::overall_gpa(&state.completed_courses)),
            transcript_credits: transcript::total_credits(&state.completed_courses),
            requirement_groups,
            semesters,
            planned,
            planned_credits: crate::core::planner::total_planned_credits(state),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;

    /// Generate a report to a file, creating parent directories
    ///
    /// # Errors
    /// Returns an error if rendering or writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, content)?;
        Ok(())
    }
}

/// Generator for `format`
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}
