//! Reference data loading: catalog, degree requirements, and profile.
//!
//! Seed files are TOML with a `[user]` table and `[[courses]]` /
//! `[[requirements]]` arrays. A sample seed is compiled in.

use crate::core::models::{Course, DegreeRequirement, UserData};
use crate::core::PlannerStore;
use crate::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Sample reference data bundled with the binary
const SAMPLE_SEED: &str = include_str!("../../assets/SampleSeed.toml");

/// Reasons a seed cannot be loaded
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be read
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    /// The seed is not valid TOML for the expected schema
    #[error("failed to parse seed: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two catalog entries share an id
    #[error("duplicate course id '{0}' in catalog")]
    DuplicateCourseId(String),

    /// A catalog entry is unusable
    #[error("invalid course '{id}': {reason}")]
    InvalidCourse {
        /// Offending course id
        id: String,
        /// What is wrong with it
        reason: String,
    },
}

/// Reference data for a new store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    /// Initial profile
    pub user: UserData,
    /// Course catalog
    #[serde(default)]
    pub courses: Vec<Course>,
    /// Degree requirements
    #[serde(default)]
    pub requirements: Vec<DegreeRequirement>,
}

impl SeedData {
    /// Parse and validate a seed from a TOML string
    ///
    /// # Errors
    /// Returns [`SeedError::Parse`] for malformed TOML, or a validation error
    /// for duplicate ids or zero-credit courses.
    pub fn from_toml(toml_str: &str) -> Result<Self, SeedError> {
        let seed: Self = toml::from_str(toml_str)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Read, parse and validate a seed file
    ///
    /// # Errors
    /// Returns [`SeedError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml`](Self::from_toml).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let seed = Self::from_toml(&content)?;
        info!(
            "Loaded seed from {}: {} courses, {} requirements",
            path.display(),
            seed.courses.len(),
            seed.requirements.len()
        );
        Ok(seed)
    }

    /// The bundled sample seed
    ///
    /// # Panics
    /// Panics if the compiled-in sample cannot be parsed.
    #[must_use]
    pub fn sample() -> Self {
        Self::from_toml(SAMPLE_SEED).expect("Failed to parse compiled-in sample seed")
    }

    /// Load from `path`, or the sample when `path` is empty
    ///
    /// # Errors
    /// As [`from_file`](Self::from_file).
    pub fn load_or_sample(path: &str) -> Result<Self, SeedError> {
        if path.trim().is_empty() {
            Ok(Self::sample())
        } else {
            Self::from_file(path)
        }
    }

    /// Check catalog invariants: unique ids and positive credits
    ///
    /// # Errors
    /// Returns the first violation found, in catalog order.
    pub fn validate(&self) -> Result<(), SeedError> {
        let mut seen = HashSet::new();
        for course in &self.courses {
            if course.id.trim().is_empty() {
                return Err(SeedError::InvalidCourse {
                    id: course.code.clone(),
                    reason: "empty id".to_string(),
                });
            }
            if course.credits == 0 {
                return Err(SeedError::InvalidCourse {
                    id: course.id.clone(),
                    reason: "credits must be positive".to_string(),
                });
            }
            if !seen.insert(course.id.as_str()) {
                return Err(SeedError::DuplicateCourseId(course.id.clone()));
            }
        }
        Ok(())
    }

    /// Build a fresh store from this seed
    #[must_use]
    pub fn into_store(self) -> PlannerStore {
        PlannerStore::new(self.user, self.courses, self.requirements)
    }
}
