//! High-level planner API for generating plans and advising on observations.
//!
//! The [`Planner`] is the single entry point the interface layers (CLI, HTTP,
//! MCP) talk to. It validates parameters, runs the schedule generator and the
//! observation classifier, and owns the [`PlanStore`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Interfaces    │    │     Planner     │    │   Rule engines  │
//! │ (HTTP, MCP,     │───▶│ (plan_ops,      │───▶│ (schedule,      │
//! │  CLI)           │    │  observation_ops)│   │  advisory)      │
//! └─────────────────┘    └────────┬────────┘    └─────────────────┘
//!                                 ▼
//!                          ┌─────────────┐
//!                          │  PlanStore  │
//!                          └─────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`plan_ops`]: plan creation and lookup
//! - [`observation_ops`]: observation feedback
//!
//! # Usage
//!
//! ```rust
//! use jiff::civil::date;
//! use sprout_core::{
//!     models::{Environment, Method},
//!     params::{AddObservation, CreatePlan, Observation},
//!     Planner,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = Planner::new();
//!
//! let plan = planner
//!     .create_plan(&CreatePlan {
//!         crop: "strawberry".to_string(),
//!         start_date: date(2024, 9, 10),
//!         method: Method::Transplant,
//!         environment: Environment::Hydroponic,
//!         area: Some(0.3),
//!         variety: None,
//!         notes: None,
//!     })
//!     .await?;
//!
//! let result = planner
//!     .add_observation(&AddObservation {
//!         plan_id: plan.id.clone(),
//!         observation: Observation {
//!             date: date(2024, 10, 1),
//!             task_name: "nutrient solution check".to_string(),
//!             symptom: "yellow new leaves".to_string(),
//!             severity: 2,
//!             note: None,
//!         },
//!     })
//!     .await?;
//! assert!(result.ok);
//! # Ok(())
//! # }
//! ```

use crate::store::PlanStore;

pub mod observation_ops;
pub mod plan_ops;

#[cfg(test)]
mod tests;

/// Main planner interface.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    pub(crate) store: PlanStore,
}

impl Planner {
    /// Creates a planner backed by a fresh, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a planner over an existing store.
    pub fn with_store(store: PlanStore) -> Self {
        Self { store }
    }

    /// The store backing this planner.
    pub fn store(&self) -> &PlanStore {
        &self.store
    }
}
