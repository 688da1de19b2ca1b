//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context-specific formatting on top.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers        │    │   Markdown      │
//! │  (Plan, Task)   │───▶│ (Timeline,      │───▶│  (terminal/MCP) │
//! │                 │    │  CreateResult)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: [`Timeline`], tasks grouped by due date
//! - [`results`]: [`CreateResult`] for newly created plans
//! - [`status`]: [`OperationStatus`] one-line outcomes
//! - [`dates`]: [`HumanDate`] calendar date formatting
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod dates;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Timeline;
pub use dates::HumanDate;
pub use results::CreateResult;
pub use status::OperationStatus;
