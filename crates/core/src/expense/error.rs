//! Input validation errors.

use livingcost_shared::AppError;
use thiserror::Error;

/// Rejected calculator input.
///
/// Exchange rate and duration are never rejected; only the closed
/// selections (children, margin, spouse) can be out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Child count outside the selectable range.
    #[error("Child count must be between 0 and {max}, got {value}")]
    ChildCountOutOfRange {
        /// Submitted value.
        value: u8,
        /// Largest selectable count.
        max: u8,
    },

    /// Margin not one of the slider positions.
    #[error("Margin must be between {min} and {max} percent in steps of {step}, got {value}")]
    InvalidMargin {
        /// Submitted value.
        value: u8,
        /// Smallest slider position.
        min: u8,
        /// Largest slider position.
        max: u8,
        /// Slider step.
        step: u8,
    },

    /// Numeric field that does not parse.
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber {
        /// Field name as submitted.
        field: &'static str,
        /// Raw submitted text.
        value: String,
    },

    /// Spouse selection that is neither yes nor no.
    #[error("Spouse selection must be 'yes' or 'no', got '{0}'")]
    InvalidSpouseSelection(String),
}

impl From<InputError> for AppError {
    fn from(err: InputError) -> Self {
        Self::Validation(err.to_string())
    }
}
