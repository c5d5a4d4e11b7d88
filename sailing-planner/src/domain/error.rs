//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from import and I/O errors.

use chrono::NaiveDate;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Arrival is not strictly after departure
    #[error("arrival {arrival} must be after departure {departure}")]
    InvalidSchedule {
        departure: NaiveDate,
        arrival: NaiveDate,
    },

    /// Sailing rate has no code
    #[error("sailing code must not be empty")]
    EmptySailingCode,
}
