//! Entity validation error types.

use thiserror::Error;

/// Errors raised by entity field validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field value does not match its required format.
    #[error("invalid {field}: {value:?}")]
    InvalidFormat {
        field: &'static str,
        value: String,
    },

    /// An optional numeric range has negative or inverted bounds.
    #[error("invalid {field} range: {message}")]
    RangeViolation {
        field: &'static str,
        message: String,
    },
}

impl ValidationError {
    /// Creates an invalid format error.
    pub fn invalid_format(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field,
            value: value.into(),
        }
    }

    /// Creates a range violation error.
    pub fn range_violation(field: &'static str, message: impl Into<String>) -> Self {
        Self::RangeViolation {
            field,
            message: message.into(),
        }
    }
}

/// Result type for entity validation.
pub type ValidationResult<T> = Result<T, ValidationError>;
