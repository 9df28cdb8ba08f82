//! Student profile model

use serde::{Deserialize, Serialize};

/// The student's profile.
///
/// `total_credits`, `completed_credits` and `gpa` are edited by hand and are
/// not reconciled with the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    /// Profile id
    pub id: String,
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Declared major
    pub major: String,
    /// Declared threads
    #[serde(default)]
    pub threads: Vec<String>,
    /// Declared minors
    #[serde(default)]
    pub minors: Vec<String>,
    /// Expected graduation term, free text (e.g., "Spring 2026")
    pub expected_graduation: String,
    /// Credits required to graduate
    pub total_credits: u32,
    /// Credits completed so far
    pub completed_credits: u32,
    /// Cumulative GPA as recorded on the profile
    pub gpa: f64,
}

/// Partial profile update; `None` fields keep their current value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    /// New name
    pub name: Option<String>,
    /// New email
    pub email: Option<String>,
    /// New major
    pub major: Option<String>,
    /// Replacement thread list
    pub threads: Option<Vec<String>>,
    /// Replacement minor list
    pub minors: Option<Vec<String>>,
    /// New expected graduation term
    pub expected_graduation: Option<String>,
    /// New credits-to-graduate figure
    pub total_credits: Option<u32>,
    /// New completed-credits figure
    pub completed_credits: Option<u32>,
    /// New profile GPA
    pub gpa: Option<f64>,
}

impl UserUpdate {
    /// Whether the update changes nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl UserData {
    /// Shallow-merge `update` into this profile
    pub fn merge(&mut self, update: UserUpdate) {
        let UserUpdate {
            name,
            email,
            major,
            threads,
            minors,
            expected_graduation,
            total_credits,
            completed_credits,
            gpa,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(major) = major {
            self.major = major;
        }
        if let Some(threads) = threads {
            self.threads = threads;
        }
        if let Some(minors) = minors {
            self.minors = minors;
        }
        if let Some(expected_graduation) = expected_graduation {
            self.expected_graduation = expected_graduation;
        }
        if let Some(total_credits) = total_credits {
            self.total_credits = total_credits;
        }
        if let Some(completed_credits) = completed_credits {
            self.completed_credits = completed_credits;
        }
        if let Some(gpa) = gpa {
            self.gpa = gpa;
        }
    }
}
