//! Course model

use super::Term;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Level a course is offered at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    /// Undergraduate course
    Undergraduate,
    /// Graduate course
    Graduate,
}

impl CourseLevel {
    /// Both levels, in catalog filter order
    pub const ALL: [Self; 2] = [Self::Undergraduate, Self::Graduate];

    /// Lowercase name (e.g., "undergraduate")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undergraduate => "undergraduate",
            Self::Graduate => "graduate",
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CourseLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "undergraduate" | "ug" => Ok(Self::Undergraduate),
            "graduate" | "grad" => Ok(Self::Graduate),
            _ => Err(format!("Unknown course level: '{s}'")),
        }
    }
}

/// Catalog entry, read-only once the catalog is loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique catalog id (e.g., "cs1301")
    pub id: String,

    /// Course code (e.g., "CS 1301")
    pub code: String,

    /// Course title (e.g., "Introduction to Computing")
    pub title: String,

    /// Credit hours (positive)
    pub credits: u32,

    /// Catalog description
    #[serde(default)]
    pub description: String,

    /// Prerequisite course codes; informational, never validated against the catalog
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// Offering college (e.g., "College of Computing")
    pub college: String,

    /// Offering department (e.g., "Computer Science")
    pub department: String,

    /// Undergraduate or graduate
    pub level: CourseLevel,

    /// Terms the course is offered in
    #[serde(default)]
    pub semester: Vec<Term>,
}

impl Course {
    /// Create a course with no description, prerequisites, or offering terms
    ///
    /// # Arguments
    /// * `id` - Unique catalog id
    /// * `code` - Course code
    /// * `title` - Course title
    /// * `credits` - Credit hours
    #[must_use]
    pub fn new(id: &str, code: &str, title: &str, credits: u32) -> Self {
        Self {
            id: id.to_string(),
            code: code.to_string(),
            title: title.to_string(),
            credits,
            description: String::new(),
            prerequisites: Vec::new(),
            college: String::new(),
            department: String::new(),
            level: CourseLevel::Undergraduate,
            semester: Vec::new(),
        }
    }

    /// Whether the course is offered in `term`
    #[must_use]
    pub fn is_offered_in(&self, term: Term) -> bool {
        self.semester.contains(&term)
    }

    /// Prerequisites as a display string ("None" when empty)
    #[must_use]
    pub fn prerequisites_label(&self) -> String {
        if self.prerequisites.is_empty() {
            "None".to_string()
        } else {
            self.prerequisites.join(", ")
        }
    }
}
