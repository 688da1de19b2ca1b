//! Error types for the planner library.

use thiserror::Error;

/// Comprehensive error type for all planner operations.
///
/// Schedule generation and observation classification are total, so every
/// variant here originates at the boundary: parameter validation or lookup.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a not-found error for a plan ID.
    pub fn plan_not_found(id: impl Into<String>) -> Self {
        PlannerError::PlanNotFound { id: id.into() }
    }

    /// Returns true when the caller supplied a request that can never succeed
    /// as sent (validation or malformed body).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PlannerError::InvalidInput { .. } | PlannerError::Serialization { .. }
        )
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
