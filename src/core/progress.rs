//! Degree progress: per-requirement percentages, grouping by type, and the
//! dashboard summary.

use crate::core::models::{DegreeRequirement, RequirementType, UserData};
use std::fmt;

/// Requirement status derived from its progress percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementStatus {
    /// 100%
    Completed,
    /// At least 50% but below 100%
    InProgress,
    /// Below 50%
    NotStarted,
}

impl RequirementStatus {
    /// Status for a clamped percentage
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Self::Completed
        } else if percentage >= 50.0 {
            Self::InProgress
        } else {
            Self::NotStarted
        }
    }

    /// Hyphenated name (e.g., "in-progress")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::NotStarted => "not-started",
        }
    }
}

impl fmt::Display for RequirementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `completed / required × 100`, clamped to `[0, 100]`.
///
/// Nothing required counts as fully done.
#[must_use]
pub fn percentage(completed: u32, required: u32) -> f64 {
    if required == 0 {
        return 100.0;
    }
    (f64::from(completed) / f64::from(required) * 100.0).clamp(0.0, 100.0)
}

/// Progress percentage for one requirement
#[must_use]
pub fn requirement_progress(requirement: &DegreeRequirement) -> f64 {
    percentage(requirement.credits_completed, requirement.credits_required)
}

/// Status for one requirement
#[must_use]
pub fn requirement_status(requirement: &DegreeRequirement) -> RequirementStatus {
    RequirementStatus::from_percentage(requirement_progress(requirement))
}

/// Requirements of one type with their combined totals
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementGroup<'a> {
    /// Requirement type shared by the group
    pub kind: RequirementType,
    /// Requirements in reference-data order
    pub requirements: Vec<&'a DegreeRequirement>,
}

impl RequirementGroup<'_> {
    /// Sum of credits required
    #[must_use]
    pub fn credits_required(&self) -> u32 {
        self.requirements.iter().map(|r| r.credits_required).sum()
    }

    /// Sum of credits completed
    #[must_use]
    pub fn credits_completed(&self) -> u32 {
        self.requirements.iter().map(|r| r.credits_completed).sum()
    }

    /// Group progress from the summed credits
    #[must_use]
    pub fn percentage(&self) -> f64 {
        percentage(self.credits_completed(), self.credits_required())
    }
}

/// Group requirements by type in display order (core, major, thread, elective, minor).
/// Types with no requirements are left out.
#[must_use]
pub fn group_by_type(requirements: &[DegreeRequirement]) -> Vec<RequirementGroup<'_>> {
    RequirementType::ALL
        .into_iter()
        .map(|kind| RequirementGroup {
            kind,
            requirements: requirements.iter().filter(|r| r.kind == kind).collect(),
        })
        .filter(|group| !group.requirements.is_empty())
        .collect()
}

/// Headline degree progress, from the profile figures and requirement list
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// `completed_credits / total_credits × 100`, clamped
    pub progress_percentage: f64,
    /// Credits still needed to graduate
    pub remaining_credits: u32,
    /// Requirements whose completed credits reach the required credits
    pub completed_requirements: usize,
    /// Number of requirements
    pub total_requirements: usize,
    /// Profile GPA
    pub gpa: f64,
    /// Expected graduation term
    pub expected_graduation: String,
}

impl DashboardSummary {
    /// Compute the summary.
    ///
    /// Uses the profile's own credit and GPA fields, not the transcript.
    #[must_use]
    pub fn compute(user: &UserData, requirements: &[DegreeRequirement]) -> Self {
        let progress_percentage = if user.total_credits == 0 {
            0.0
        } else {
            percentage(user.completed_credits, user.total_credits)
        };
        Self {
            progress_percentage,
            remaining_credits: user.total_credits.saturating_sub(user.completed_credits),
            completed_requirements: requirements.iter().filter(|r| r.is_satisfied()).count(),
            total_requirements: requirements.len(),
            gpa: user.gpa,
            expected_graduation: user.expected_graduation.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirement(id: &str, kind: RequirementType, required: u32, completed: u32) -> DegreeRequirement {
        DegreeRequirement {
            id: id.to_string(),
            name: id.to_string(),
            kind,
            credits_required: required,
            credits_completed: completed,
            courses: Vec::new(),
            flexible_options: None,
            description: String::new(),
        }
    }

    #[test]
    fn test_percentage_is_clamped() {
        assert!((percentage(6, 12) - 50.0).abs() < f64::EPSILON);
        assert!((percentage(18, 12) - 100.0).abs() < f64::EPSILON);
        assert!(percentage(0, 12).abs() < f64::EPSILON);
        assert!((percentage(0, 0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_status_thresholds() {
        let status = |required, completed| {
            requirement_status(&requirement("r", RequirementType::Core, required, completed))
        };
        assert_eq!(status(12, 12), RequirementStatus::Completed);
        assert_eq!(status(12, 20), RequirementStatus::Completed);
        assert_eq!(status(12, 6), RequirementStatus::InProgress);
        assert_eq!(status(12, 11), RequirementStatus::InProgress);
        assert_eq!(status(12, 5), RequirementStatus::NotStarted);
        assert_eq!(RequirementStatus::InProgress.to_string(), "in-progress");
    }

    #[test]
    fn test_grouping_follows_type_order() {
        let reqs = vec![
            requirement("thread-theory", RequirementType::Thread, 18, 0),
            requirement("core-math", RequirementType::Core, 12, 6),
            requirement("cs-foundation", RequirementType::Major, 15, 0),
            requirement("english", RequirementType::Core, 6, 6),
        ];
        let groups = group_by_type(&reqs);
        let kinds: Vec<RequirementType> = groups.iter().map(|g| g.kind).collect();
        assert_eq!(
            kinds,
            vec![RequirementType::Core, RequirementType::Major, RequirementType::Thread]
        );

        let core = &groups[0];
        assert_eq!(core.requirements[0].id, "core-math");
        assert_eq!(core.credits_required(), 18);
        assert_eq!(core.credits_completed(), 12);
        assert!((core.percentage() - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_dashboard_summary() {
        let user = UserData {
            id: "u".to_string(),
            name: "Alex".to_string(),
            email: String::new(),
            major: "Computer Science".to_string(),
            threads: Vec::new(),
            minors: Vec::new(),
            expected_graduation: "Spring 2026".to_string(),
            total_credits: 120,
            completed_credits: 45,
            gpa: 3.67,
        };
        let reqs = vec![
            requirement("a", RequirementType::Core, 6, 6),
            requirement("b", RequirementType::Core, 12, 0),
        ];
        let summary = DashboardSummary::compute(&user, &reqs);

        assert!((summary.progress_percentage - 37.5).abs() < 1e-9);
        assert_eq!(summary.remaining_credits, 75);
        assert_eq!(summary.completed_requirements, 1);
        assert_eq!(summary.total_requirements, 2);
    }

    #[test]
    fn test_dashboard_with_zero_total_credits() {
        let user = UserData {
            id: "u".to_string(),
            name: String::new(),
            email: String::new(),
            major: String::new(),
            threads: Vec::new(),
            minors: Vec::new(),
            expected_graduation: String::new(),
            total_credits: 0,
            completed_credits: 10,
            gpa: 0.0,
        };
        let summary = DashboardSummary::compute(&user, &[]);
        assert!(summary.progress_percentage.abs() < f64::EPSILON);
        assert_eq!(summary.remaining_credits, 0);
    }
}
