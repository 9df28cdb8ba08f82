//! Completed-course records (the academic transcript)

use super::Term;
use crate::core::Grade;
use serde::{Deserialize, Serialize};

/// A course on the student's record. Created only by the store; never edited.
///
/// `code` need not exist in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedCourse {
    /// Generated record id (e.g., "completed-3"), unique and never reused
    pub course_id: String,
    /// Course code (e.g., "CS 1301")
    pub code: String,
    /// Course title
    pub title: String,
    /// Credit hours (positive)
    pub credits: u32,
    /// Letter grade
    pub grade: Grade,
    /// Term the course was taken
    pub semester: Term,
    /// Year the course was taken
    pub year: u16,
    /// Grade points, fixed at creation from `grade`
    pub gpa: f64,
}

impl CompletedCourse {
    /// Grade points weighted by credits
    #[must_use]
    pub fn quality_points(&self) -> f64 {
        self.gpa * f64::from(self.credits)
    }

    /// Transcript grouping key, `"<Term> <year>"` (e.g., "Fall 2024")
    #[must_use]
    pub fn semester_key(&self) -> String {
        format!("{} {}", self.semester, self.year)
    }
}

/// Unvalidated input for recording a completed course, as entered in a form.
///
/// The store validates every field when the request is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCompletedCourse {
    /// Course code
    pub code: String,
    /// Course title
    pub title: String,
    /// Credit hours; must be positive
    pub credits: i64,
    /// Letter grade; must be in the grade vocabulary
    pub grade: String,
    /// Term name (Fall, Spring, Summer)
    pub semester: String,
    /// Four-digit year
    pub year: i64,
}

impl NewCompletedCourse {
    /// Build a request from its parts
    #[must_use]
    pub fn new(
        code: &str,
        title: &str,
        credits: i64,
        grade: &str,
        semester: &str,
        year: i64,
    ) -> Self {
        Self {
            code: code.to_string(),
            title: title.to_string(),
            credits,
            grade: grade.to_string(),
            semester: semester.to_string(),
            year,
        }
    }
}
