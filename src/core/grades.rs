//! Fixed letter-grade vocabulary and its grade-point table

use crate::core::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grade recorded on a completed course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Grade {
    /// A (4.0)
    A,
    /// A- (3.7)
    AMinus,
    /// B+ (3.3)
    BPlus,
    /// B (3.0)
    B,
    /// B- (2.7)
    BMinus,
    /// C+ (2.3)
    CPlus,
    /// C (2.0)
    C,
    /// C- (1.7)
    CMinus,
    /// D+ (1.3)
    DPlus,
    /// D (1.0)
    D,
    /// D- (0.7)
    DMinus,
    /// F (0.0)
    F,
}

impl Grade {
    /// Every grade, best first
    pub const ALL: [Self; 12] = [
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CPlus,
        Self::C,
        Self::CMinus,
        Self::DPlus,
        Self::D,
        Self::DMinus,
        Self::F,
    ];

    /// Grade points awarded for this grade
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::A => 4.0,
            Self::AMinus => 3.7,
            Self::BPlus => 3.3,
            Self::B => 3.0,
            Self::BMinus => 2.7,
            Self::CPlus => 2.3,
            Self::C => 2.0,
            Self::CMinus => 1.7,
            Self::DPlus => 1.3,
            Self::D => 1.0,
            Self::DMinus => 0.7,
            Self::F => 0.0,
        }
    }

    /// Letter as written on a transcript (e.g., "B+")
    #[must_use]
    pub const fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::DMinus => "D-",
            Self::F => "F",
        }
    }
}

impl FromStr for Grade {
    type Err = StoreError;

    /// Exact, case-sensitive match against the vocabulary
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.letter() == s)
            .ok_or_else(|| StoreError::InvalidGrade(s.to_string()))
    }
}

impl TryFrom<String> for Grade {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.letter().to_string()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.letter())
    }
}
