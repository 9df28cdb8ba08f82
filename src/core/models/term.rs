//! Academic terms and semester-slot identifiers

use crate::core::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Academic term within a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// Fall term
    Fall,
    /// Spring term
    Spring,
    /// Summer term
    Summer,
}

impl Term {
    /// All terms in catalog order
    pub const ALL: [Self; 3] = [Self::Fall, Self::Spring, Self::Summer];

    /// Display precedence within a year: Fall(3) > Summer(2) > Spring(1)
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Fall => 3,
            Self::Summer => 2,
            Self::Spring => 1,
        }
    }

    /// Capitalized name (e.g., "Fall")
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fall => "Fall",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
        }
    }

    /// Lowercase name used in slot ids (e.g., "fall")
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Fall => "fall",
            Self::Spring => "spring",
            Self::Summer => "summer",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Term {
    type Err = StoreError;

    /// Case-insensitive term name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fall" => Ok(Self::Fall),
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            _ => Err(StoreError::InvalidTerm(s.to_string())),
        }
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Term {
    /// Chronological order within a calendar year: Spring, Summer, Fall
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.precedence().cmp(&other.precedence())
    }
}

/// Addressable bucket in the planning grid, written `"<term-lowercase>-<yyyy>"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId {
    /// Year of the slot
    pub year: u16,
    /// Term of the slot
    pub term: Term,
}

impl SlotId {
    /// Create a slot id
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidYear`] if `year` is not four digits
    pub fn new(term: Term, year: i64) -> Result<Self, StoreError> {
        if !(1000..=9999).contains(&year) {
            return Err(StoreError::InvalidYear(year));
        }
        let year = u16::try_from(year).map_err(|_| StoreError::InvalidYear(year))?;
        Ok(Self { year, term })
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:04}", self.term.slug(), self.year)
    }
}

impl FromStr for SlotId {
    type Err = StoreError;

    /// Parses the exact form `fall-2025`: lowercase term, hyphen, four ASCII digits
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StoreError::InvalidSlotId(s.to_string());

        let (term, year) = s.split_once('-').ok_or_else(invalid)?;
        let term = Term::ALL
            .into_iter()
            .find(|t| t.slug() == term)
            .ok_or_else(invalid)?;
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let year: u16 = year.parse().map_err(|_| invalid())?;
        if year < 1000 {
            return Err(invalid());
        }
        Ok(Self { year, term })
    }
}

impl Serialize for SlotId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
