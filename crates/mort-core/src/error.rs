//! Error types for the prediction engine.

use thiserror::Error;

use crate::profile::Field;

/// Result type for prediction operations.
pub type MortResult<T> = Result<T, MortError>;

/// Errors that can occur while preparing or producing a prediction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MortError {
    /// The age is not a finite positive number.
    #[error("enter a valid age, mortal: \"{0}\"")]
    InvalidAge(String),

    /// A required profile field was left blank.
    #[error("missing required field: {0}")]
    MissingField(Field),

    /// A death date string is not in `M/D/Y` form.
    #[error("invalid death date: \"{0}\"")]
    InvalidDate(String),
}
