//! Contract error types for the employee example
//!
//! Storage failures keep the driver's message so callers see what the
//! database reported.

use thiserror::Error;

/// Employee persistence errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeError {
    /// No stored employee has this identifier
    #[error("employee not found: {id}")]
    NotFound { id: i32 },

    /// Operation needs an identifier the object does not carry
    #[error("employee '{name}' has no id, required for {operation}")]
    MissingId { name: String, operation: String },

    /// A query returned a different number of rows than the caller required
    #[error("expected {expected} employee(s) matching {query}, found {actual}")]
    UnexpectedCount {
        query: String,
        expected: usize,
        actual: usize,
    },

    /// Invalid input
    #[error("validation error: {message}")]
    Validation { message: String },

    /// ORM setup is not available (never initialised or already cleaned up)
    #[error("ORM setup is not initialized")]
    NotInitialized,

    /// Error reported by the database or ORM runtime
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl EmployeeError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
