//! Task model definition.

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Stage;

/// One dated action item within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Task {
    /// Short name of the action
    pub name: String,

    /// Growth stage the task belongs to
    pub stage: Stage,

    /// Calendar date the task is due
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub due_date: Date,

    /// Items to verify while carrying out the task
    #[serde(default)]
    pub checklist: Vec<String>,

    /// Free-form notes
    pub notes: Option<String>,
}
