//! Catalog search and filter helpers

use crate::core::models::{Course, CourseLevel};
use std::fmt;
use std::str::FromStr;

/// Credit filter: an exact credit count, or six and above
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditFilter {
    /// Exactly this many credits
    Exact(u32),
    /// Six credits or more
    SixOrMore,
}

impl CreditFilter {
    /// Options offered by the catalog browser
    pub const OPTIONS: [Self; 5] = [
        Self::Exact(1),
        Self::Exact(2),
        Self::Exact(3),
        Self::Exact(4),
        Self::SixOrMore,
    ];

    /// Whether a course with `credits` passes the filter
    #[must_use]
    pub const fn matches(self, credits: u32) -> bool {
        match self {
            Self::Exact(n) => credits == n,
            Self::SixOrMore => credits >= 6,
        }
    }
}

impl FromStr for CreditFilter {
    type Err = String;

    /// `"6+"` or a whole number
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "6+" {
            return Ok(Self::SixOrMore);
        }
        s.parse::<u32>()
            .map(Self::Exact)
            .map_err(|_| format!("Invalid credit filter: '{s}' (expected a number or 6+)"))
    }
}

impl fmt::Display for CreditFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::SixOrMore => f.write_str("6+"),
        }
    }
}

/// Catalog query. Every criterion that is set must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseQuery {
    /// Case-insensitive substring of code, title, or description; empty matches all
    pub text: String,
    /// Exact college
    pub college: Option<String>,
    /// Exact level
    pub level: Option<CourseLevel>,
    /// Credit filter
    pub credits: Option<CreditFilter>,
}

impl CourseQuery {
    /// Query matching `text` only
    #[must_use]
    pub fn text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }

    /// Whether `course` satisfies every set criterion
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        let needle = self.text.to_lowercase();
        let text_match = [&course.code, &course.title, &course.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle));

        text_match
            && self.college.as_ref().is_none_or(|c| &course.college == c)
            && self.level.is_none_or(|l| course.level == l)
            && self.credits.is_none_or(|f| f.matches(course.credits))
    }
}

/// Courses matching `query`, in catalog order
#[must_use]
pub fn search<'a>(courses: &'a [Course], query: &CourseQuery) -> Vec<&'a Course> {
    courses.iter().filter(|c| query.matches(c)).collect()
}

/// Distinct colleges in first-seen order
#[must_use]
pub fn colleges(courses: &[Course]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for course in courses {
        if !seen.contains(&course.college.as_str()) {
            seen.push(&course.college);
        }
    }
    seen
}
