//! Plan model definition and related functionality.

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Environment, Method, Task};

/// A generated farming schedule tied to one crop-planting decision.
///
/// Carries every field of the [`CreatePlan`](crate::params::CreatePlan)
/// request it was generated from, plus the assigned ID and the tasks. Plans
/// are never modified after generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Plan {
    /// Short opaque identifier, unique within the store
    pub id: String,

    /// Crop name
    pub crop: String,

    /// Sowing or transplanting date the schedule is anchored on
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub start_date: Date,

    /// Planting method
    pub method: Method,

    /// Cultivation environment
    pub environment: Environment,

    /// Cultivated area
    pub area: Option<f64>,

    /// Crop variety
    pub variety: Option<String>,

    /// Free-form notes from the grower
    pub notes: Option<String>,

    /// Tasks ordered by due date
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Plan {
    /// Looks up a task by name.
    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.name == name)
    }

    /// Date of the last task in the schedule.
    pub fn end_date(&self) -> Option<Date> {
        self.tasks.last().map(|task| task.due_date)
    }
}

impl AsRef<Plan> for Plan {
    fn as_ref(&self) -> &Plan {
        self
    }
}
