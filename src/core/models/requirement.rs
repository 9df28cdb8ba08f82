//! Degree requirement model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Requirement classification, used for grouping and display only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementType {
    /// Institution-wide core
    Core,
    /// Major requirement
    Major,
    /// Thread (CS specialization track)
    Thread,
    /// Free elective
    Elective,
    /// Minor requirement
    Minor,
}

impl RequirementType {
    /// Types in display order
    pub const ALL: [Self; 5] = [
        Self::Core,
        Self::Major,
        Self::Thread,
        Self::Elective,
        Self::Minor,
    ];

    /// Section heading for this type
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Core => "Core Requirements",
            Self::Major => "Major Requirements",
            Self::Thread => "Thread Requirements",
            Self::Elective => "Elective Requirements",
            Self::Minor => "Minor Requirements",
        }
    }

    /// Lowercase name (e.g., "thread")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Major => "major",
            Self::Thread => "thread",
            Self::Elective => "elective",
            Self::Minor => "minor",
        }
    }
}

impl fmt::Display for RequirementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A degree target the student must satisfy. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeRequirement {
    /// Requirement id (e.g., "core-math")
    pub id: String,
    /// Display name
    pub name: String,
    /// Classification
    #[serde(rename = "type")]
    pub kind: RequirementType,
    /// Credits needed to satisfy the requirement
    pub credits_required: u32,
    /// Credits counted so far; reference data, not derived from the transcript
    #[serde(default)]
    pub credits_completed: u32,
    /// Required course codes
    #[serde(default)]
    pub courses: Vec<String>,
    /// Alternative course codes that also satisfy the requirement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flexible_options: Option<Vec<String>>,
    /// Description
    #[serde(default)]
    pub description: String,
}

impl DegreeRequirement {
    /// Whether completed credits reach the required credits
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        self.credits_completed >= self.credits_required
    }

    /// Credits still needed (never negative)
    #[must_use]
    pub const fn credits_remaining(&self) -> u32 {
        self.credits_required.saturating_sub(self.credits_completed)
    }
}
