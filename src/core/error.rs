//! Errors raised at the store's mutation boundary

use thiserror::Error;

/// A mutation request that violates the store's input contract.
///
/// A rejected request never changes the state snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The grade is not part of the fixed grade vocabulary
    #[error("invalid grade '{0}' (expected one of A, A-, B+, B, B-, C+, C, C-, D+, D, D-, F)")]
    InvalidGrade(String),

    /// Credits must be a positive whole number
    #[error("invalid credits {0} (must be a positive whole number)")]
    InvalidCredits(i64),

    /// The semester slot id is not `<term>-<yyyy>`
    #[error("invalid semester slot id '{0}' (expected e.g. 'fall-2025')")]
    InvalidSlotId(String),

    /// The term name is not Fall, Spring or Summer
    #[error("invalid term '{0}' (expected Fall, Spring or Summer)")]
    InvalidTerm(String),

    /// The year is not a four-digit year
    #[error("invalid year {0} (expected a four-digit year)")]
    InvalidYear(i64),
}
