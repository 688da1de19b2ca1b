//! Core library for the Sprout crop scheduling service.
//!
//! This crate provides the two rule engines behind the service and the
//! plumbing around them:
//!
//! - [`schedule`]: turns a planting plan into dated tasks, scaled by the
//!   cultivation environment
//! - [`advisory`]: maps a field observation to an advisory message through an
//!   ordered rule table
//! - [`store`]: in-memory plan storage for the life of the process
//! - [`planner`]: the async facade interfaces call into
//!
//! # Display Architecture
//!
//! Domain models implement [`std::fmt::Display`] as markdown (see
//! [`display`]); the CLI renders it to the terminal and the MCP server returns
//! it as tool output. HTTP clients get the serde JSON form instead.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use sprout_core::{
//!     models::{Environment, Method},
//!     params::{CreatePlan, Id},
//!     Planner,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = Planner::new();
//!
//! let plan = planner
//!     .create_plan(&CreatePlan {
//!         crop: "tomato".to_string(),
//!         start_date: date(2024, 3, 1),
//!         method: Method::Transplant,
//!         environment: Environment::Greenhouse,
//!         area: Some(100.0),
//!         variety: None,
//!         notes: None,
//!     })
//!     .await?;
//! println!("{}", plan);
//!
//! let same = planner.show_plan(&Id::new(&plan.id)).await?;
//! assert_eq!(same.tasks.len(), 9);
//! # Ok(())
//! # }
//! ```

pub mod advisory;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod schedule;
pub mod store;

// Re-export commonly used types
pub use display::{CreateResult, HumanDate, OperationStatus, Timeline};
pub use error::{PlannerError, Result};
pub use models::{Environment, Method, ObservationResult, Plan, Stage, Task};
pub use params::{AddObservation, CreatePlan, Id, Observation};
pub use planner::Planner;
pub use store::PlanStore;
