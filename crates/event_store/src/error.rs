//! Event store error types.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: i64,
    },

    /// Unique constraint violation.
    #[error("{entity_type} already exists: {field} = {value}")]
    AlreadyExists {
        entity_type: &'static str,
        field: &'static str,
        value: String,
    },

    /// Foreign key constraint violation.
    #[error("foreign key constraint violation: {0}")]
    ForeignKeyViolation(String),

    /// Entity validation failed before persistence.
    #[error(transparent)]
    Validation(#[from] entities::ValidationError),
}

impl StoreError {
    /// Creates a not found error.
    pub fn not_found(entity_type: &'static str, id: i64) -> Self {
        Self::NotFound { entity_type, id }
    }

    /// Creates an already exists error.
    pub fn already_exists(
        entity_type: &'static str,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::AlreadyExists {
            entity_type,
            field,
            value: value.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
