//! Parameter structures for Sprout operations
//!
//! This module contains the request structures shared by every interface
//! (CLI, HTTP, MCP). They carry serde derives for JSON bodies and, behind the
//! `schema` feature, `JsonSchema` derives for MCP tool discovery. Interface
//! layers convert their own argument types into these before calling the
//! [`Planner`](crate::Planner).
//!
//! ## Validation
//!
//! Enumerated fields (`method`, `environment`) and calendar dates are enforced
//! by deserialization itself: an unknown category or an impossible date never
//! produces a value. Numeric bounds that the type system cannot express are
//! checked by the `validate` methods, which the planner runs before any core
//! logic.
//!
//! ```rust
//! use sprout_core::params::Observation;
//!
//! let obs: Observation = serde_json::from_str(
//!     r#"{"date": "2024-03-10", "task_name": "pest control"}"#,
//! ).unwrap();
//! assert_eq!(obs.severity, 2);
//! assert_eq!(obs.symptom, "");
//! assert!(obs.validate().is_ok());
//! ```

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PlannerError, Result},
    models::{Environment, Method},
};

/// Lowest accepted observation severity.
pub const MIN_SEVERITY: u8 = 1;

/// Highest accepted observation severity.
pub const MAX_SEVERITY: u8 = 3;

/// Severity assumed when the observation omits one.
pub const DEFAULT_SEVERITY: u8 = 2;

/// Generic parameters for operations requiring just a plan ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the plan to operate on
    pub id: String,
}

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Parameters for creating a new plan.
///
/// Describes one crop-planting decision; the schedule generator turns it into
/// a dated list of tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreatePlan {
    /// Crop name (e.g. "tomato")
    pub crop: String,
    /// Sowing or transplanting date, `YYYY-MM-DD`
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub start_date: Date,
    /// Planting method: seed, transplant or grafting
    pub method: Method,
    /// Cultivation environment: open, greenhouse or hydroponic
    pub environment: Environment,
    /// Optional cultivated area; must be positive when given
    #[serde(default)]
    pub area: Option<f64>,
    /// Optional crop variety
    #[serde(default)]
    pub variety: Option<String>,
    /// Optional free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl CreatePlan {
    /// Checks the constraints deserialization cannot express.
    pub fn validate(&self) -> Result<()> {
        if let Some(area) = self.area {
            if !area.is_finite() || area <= 0.0 {
                return Err(PlannerError::invalid_input("area")
                    .with_reason(format!("must be a positive number, got {area}")));
            }
        }
        Ok(())
    }
}

fn default_severity() -> u8 {
    DEFAULT_SEVERITY
}

/// A field report of a symptom tied to a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Observation {
    /// Date of the observation, `YYYY-MM-DD`
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub date: Date,
    /// Name of the task the observation was made under
    pub task_name: String,
    /// Observed symptom in free text
    #[serde(default)]
    pub symptom: String,
    /// Severity from 1 (minor) to 3 (severe)
    #[serde(default = "default_severity")]
    pub severity: u8,
    /// Optional note
    #[serde(default)]
    pub note: Option<String>,
}

impl Observation {
    /// Checks the severity bounds.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_SEVERITY..=MAX_SEVERITY).contains(&self.severity) {
            return Err(PlannerError::invalid_input("severity").with_reason(format!(
                "must be between {MIN_SEVERITY} and {MAX_SEVERITY}, got {}",
                self.severity
            )));
        }
        Ok(())
    }
}

/// Parameters for submitting an observation against a plan.
///
/// Extends the observation with the ID of the plan it refers to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddObservation {
    /// ID of the plan the observation belongs to
    pub plan_id: String,
    /// The observation itself
    #[serde(flatten)]
    pub observation: Observation,
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use serde_json::json;

    use super::*;

    fn create_params(area: Option<f64>) -> CreatePlan {
        CreatePlan {
            crop: "lettuce".to_string(),
            start_date: date(2024, 5, 1),
            method: Method::Seed,
            environment: Environment::Open,
            area,
            variety: None,
            notes: None,
        }
    }

    #[test]
    fn test_create_plan_minimal_body() {
        let params: CreatePlan = serde_json::from_value(json!({
            "crop": "tomato",
            "start_date": "2024-03-01",
            "method": "transplant",
            "environment": "greenhouse",
        }))
        .unwrap();
        assert_eq!(params.start_date, date(2024, 3, 1));
        assert_eq!(params.area, None);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_create_plan_rejects_unknown_method() {
        let result = serde_json::from_value::<CreatePlan>(json!({
            "crop": "tomato",
            "start_date": "2024-03-01",
            "method": "cloning",
            "environment": "open",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_plan_rejects_impossible_date() {
        let result = serde_json::from_value::<CreatePlan>(json!({
            "crop": "tomato",
            "start_date": "2024-02-30",
            "method": "seed",
            "environment": "open",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_area_must_be_positive() {
        assert!(create_params(Some(0.5)).validate().is_ok());
        assert!(create_params(None).validate().is_ok());

        let err = create_params(Some(0.0)).validate().unwrap_err();
        assert!(matches!(err, PlannerError::InvalidInput { ref field, .. } if field == "area"));
        assert!(create_params(Some(-3.0)).validate().is_err());
        assert!(create_params(Some(f64::NAN)).validate().is_err());
    }

    #[test]
    fn test_observation_severity_bounds() {
        let mut obs: Observation = serde_json::from_value(json!({
            "date": "2024-03-10",
            "task_name": "pest control",
            "symptom": "aphids",
        }))
        .unwrap();
        assert_eq!(obs.severity, DEFAULT_SEVERITY);

        for severity in MIN_SEVERITY..=MAX_SEVERITY {
            obs.severity = severity;
            assert!(obs.validate().is_ok());
        }

        obs.severity = 0;
        assert!(obs.validate().is_err());
        obs.severity = 4;
        let err = obs.validate().unwrap_err();
        assert!(err.to_string().contains("between 1 and 3"));
    }

    #[test]
    fn test_add_observation_flattens_fields() {
        let params: AddObservation = serde_json::from_value(json!({
            "plan_id": "abcd1234",
            "date": "2024-03-10",
            "task_name": "pest control",
            "severity": 3,
        }))
        .unwrap();
        assert_eq!(params.plan_id, "abcd1234");
        assert_eq!(params.observation.severity, 3);
        assert_eq!(params.observation.note, None);
    }
}
