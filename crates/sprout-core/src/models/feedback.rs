//! Observation feedback returned to the caller.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Feedback text shown when an observation references an unknown plan.
pub const PLAN_NOT_FOUND_FEEDBACK: &str = "plan not found";

/// Outcome of submitting an observation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ObservationResult {
    /// Whether the observation was matched against an existing plan
    pub ok: bool,

    /// Advisory message
    pub feedback: String,
}

impl ObservationResult {
    /// Feedback produced for an existing plan.
    pub fn advice(feedback: impl Into<String>) -> Self {
        Self {
            ok: true,
            feedback: feedback.into(),
        }
    }

    /// Result for an observation whose plan is not in the store.
    pub fn plan_not_found() -> Self {
        Self {
            ok: false,
            feedback: PLAN_NOT_FOUND_FEEDBACK.to_string(),
        }
    }
}
