//! Data models for plans, tasks and observation feedback.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures separate from
//! presentation.
//!
//! # Wire Format
//!
//! All models serialize through serde as plain JSON objects. Enumerations use
//! their lowercase names (`"greenhouse"`, `"veg"`) and calendar dates use the
//! ISO `YYYY-MM-DD` form produced by [`jiff::civil::Date`].
//!
//! ```rust
//! use sprout_core::models::{Stage, Task};
//! use jiff::civil::date;
//!
//! let task = Task {
//!     name: "pest control".to_string(),
//!     stage: Stage::Flower,
//!     due_date: date(2024, 4, 13),
//!     checklist: vec!["replace sticky traps".to_string()],
//!     notes: None,
//! };
//! let json = serde_json::to_value(&task).unwrap();
//! assert_eq!(json["stage"], "flower");
//! assert_eq!(json["due_date"], "2024-04-13");
//! ```

pub mod categories;
pub mod feedback;
pub mod plan;
pub mod task;

#[cfg(test)]
mod tests;

pub use categories::{Environment, Method, Stage};
pub use feedback::{ObservationResult, PLAN_NOT_FOUND_FEEDBACK};
pub use plan::Plan;
pub use task::Task;
