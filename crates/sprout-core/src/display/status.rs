//! Status messages for operation feedback.

use std::fmt;

use crate::models::ObservationResult;

/// Wrapper type for displaying a one-line operation outcome.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl From<&ObservationResult> for OperationStatus {
    fn from(result: &ObservationResult) -> Self {
        if result.ok {
            Self::success(result.feedback.clone())
        } else {
            Self::failure(result.feedback.clone())
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Feedback:" } else { "Error:" },
            self.message
        )
    }
}
