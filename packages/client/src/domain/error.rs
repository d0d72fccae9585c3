//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ActivityId must be a positive integer
    #[error("ActivityId must be a positive integer (got {0})")]
    ActivityIdNotPositive(i64),

    /// ActivityId could not be parsed from text
    #[error("ActivityId must be an integer (got: {0})")]
    ActivityIdInvalidFormat(String),

    /// UserId must be a positive integer
    #[error("UserId must be a positive integer (got {0})")]
    UserIdNotPositive(i64),

    /// Category is not one of the known categories
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// ReservationStatus is not one of the known statuses
    #[error("Unknown reservation status: {0}")]
    UnknownReservationStatus(String),
}
