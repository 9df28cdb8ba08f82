//! Transcript views: GPA and per-semester grouping over completed courses.
//!
//! Nothing here is stored; every figure is recomputed from the slice given.

use crate::core::models::{CompletedCourse, Term};
use std::cmp::Reverse;

/// Credit-weighted mean grade points over `courses`; `0.0` when there are no credits
#[must_use]
pub fn weighted_gpa<'a, I>(courses: I) -> f64
where
    I: IntoIterator<Item = &'a CompletedCourse>,
{
    let (points, credits) = courses
        .into_iter()
        .fold((0.0_f64, 0_u64), |(points, credits), course| {
            (points + course.quality_points(), credits + u64::from(course.credits))
        });
    if credits == 0 {
        0.0
    } else {
        // Exact below 2^53 credits
        #[allow(clippy::cast_precision_loss)]
        let credits = credits as f64;
        points / credits
    }
}

/// Overall GPA across the whole transcript
#[must_use]
pub fn overall_gpa(courses: &[CompletedCourse]) -> f64 {
    weighted_gpa(courses)
}

/// Sum of credits across the transcript
///
/// Summed in `u64`: each record may carry up to `u32::MAX` credits.
#[must_use]
pub fn total_credits(courses: &[CompletedCourse]) -> u64 {
    courses.iter().map(|c| u64::from(c.credits)).sum()
}

/// Completed courses taken in one term of one year
#[derive(Debug, Clone, PartialEq)]
pub struct SemesterRecord<'a> {
    /// Term
    pub term: Term,
    /// Year
    pub year: u16,
    /// Courses in the order they were recorded
    pub courses: Vec<&'a CompletedCourse>,
}

impl SemesterRecord<'_> {
    /// Grouping key, `"<Term> <year>"` (e.g., "Fall 2024")
    #[must_use]
    pub fn key(&self) -> String {
        format!("{} {}", self.term, self.year)
    }

    /// GPA for this semester only
    #[must_use]
    pub fn gpa(&self) -> f64 {
        weighted_gpa(self.courses.iter().copied())
    }

    /// Credits taken this semester
    #[must_use]
    pub fn credits(&self) -> u64 {
        self.courses.iter().map(|c| u64::from(c.credits)).sum()
    }
}

/// Group the transcript by semester, newest first.
///
/// Years descend; within a year Fall precedes Summer precedes Spring.
#[must_use]
pub fn by_semester(courses: &[CompletedCourse]) -> Vec<SemesterRecord<'_>> {
    let mut groups: Vec<SemesterRecord<'_>> = Vec::new();
    for course in courses {
        match groups
            .iter_mut()
            .find(|g| g.term == course.semester && g.year == course.year)
        {
            Some(group) => group.courses.push(course),
            None => groups.push(SemesterRecord {
                term: course.semester,
                year: course.year,
                courses: vec![course],
            }),
        }
    }
    groups.sort_by_key(|g| Reverse((g.year, g.term.precedence())));
    groups
}

/// GPA for the semester named by `key` (e.g., "Spring 2025"), if any course was taken then
#[must_use]
pub fn semester_gpa(courses: &[CompletedCourse], key: &str) -> Option<f64> {
    let matching: Vec<&CompletedCourse> =
        courses.iter().filter(|c| c.semester_key() == key).collect();
    if matching.is_empty() {
        None
    } else {
        Some(weighted_gpa(matching))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Grade;

    fn taken(code: &str, credits: u32, grade: Grade, term: Term, year: u16) -> CompletedCourse {
        CompletedCourse {
            course_id: format!("completed-{code}"),
            code: code.to_string(),
            title: code.to_string(),
            credits,
            grade,
            semester: term,
            year,
            gpa: grade.points(),
        }
    }

    #[test]
    fn test_empty_transcript_gpa_is_zero() {
        assert!(overall_gpa(&[]).abs() < f64::EPSILON);
        assert_eq!(total_credits(&[]), 0);
    }

    #[test]
    fn test_weighted_gpa() {
        let courses = vec![
            taken("CS 1301", 4, Grade::BPlus, Term::Fall, 2024),
            taken("MATH 1551", 2, Grade::A, Term::Fall, 2024),
        ];
        let expected = (3.3 * 4.0 + 4.0 * 2.0) / 6.0;
        assert!((overall_gpa(&courses) - expected).abs() < 1e-9);
        assert_eq!(total_credits(&courses), 6);
    }

    #[test]
    fn test_grouping_order() {
        let courses = vec![
            taken("A", 3, Grade::A, Term::Spring, 2024),
            taken("B", 3, Grade::B, Term::Fall, 2023),
            taken("C", 3, Grade::C, Term::Fall, 2024),
            taken("D", 3, Grade::A, Term::Summer, 2024),
            taken("E", 3, Grade::B, Term::Spring, 2024),
        ];
        let keys: Vec<String> = by_semester(&courses).iter().map(SemesterRecord::key).collect();
        assert_eq!(
            keys,
            vec!["Fall 2024", "Summer 2024", "Spring 2024", "Fall 2023"]
        );
    }

    #[test]
    fn test_semester_totals() {
        let courses = vec![
            taken("A", 3, Grade::A, Term::Spring, 2024),
            taken("B", 1, Grade::C, Term::Spring, 2024),
            taken("C", 4, Grade::F, Term::Fall, 2024),
        ];
        let groups = by_semester(&courses);
        let spring = groups.iter().find(|g| g.key() == "Spring 2024").unwrap();
        assert_eq!(spring.credits(), 4);
        assert!((spring.gpa() - 3.5).abs() < 1e-9);
        assert_eq!(
            spring.courses.iter().map(|c| c.code.as_str()).collect::<Vec<_>>(),
            vec!["A", "B"]
        );
    }

    #[test]
    fn test_semester_gpa_lookup() {
        let courses = vec![
            taken("A", 3, Grade::AMinus, Term::Summer, 2025),
            taken("B", 3, Grade::B, Term::Fall, 2025),
        ];
        let summer = semester_gpa(&courses, "Summer 2025").unwrap();
        assert!((summer - 3.7).abs() < 1e-9);
        assert!(semester_gpa(&courses, "Spring 2025").is_none());
    }
}
