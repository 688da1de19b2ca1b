//! Schedule generation.
//!
//! Turns a [`CreatePlan`] request into a [`Plan`]: a fixed template of tasks
//! (see [`template`]) is laid out on the calendar relative to the start date,
//! with every offset scaled by the environment factor (see [`factor`]).
//!
//! # Algorithm
//!
//! 1. Look up the environment factor `ef`.
//! 2. For every template row, `due_date = start_date + round(offset_days * ef)`.
//! 3. Emit the eight base tasks, then the environment-specific task if any.
//! 4. Stable-sort by due date, so tasks sharing a date keep template order.
//! 5. Attach a freshly generated ID.
//!
//! # Rounding
//!
//! Scaled offsets are rounded half-to-even. The only tie the template can
//! produce is greenhouse establishment care, `5 * 0.9 = 4.5`, which lands on
//! day 4, not day 5.
//!
//! ```rust
//! use jiff::civil::date;
//! use sprout_core::{
//!     models::{Environment, Method},
//!     params::CreatePlan,
//!     schedule,
//! };
//!
//! let plan = schedule::generate(&CreatePlan {
//!     crop: "tomato".to_string(),
//!     start_date: date(2024, 3, 1),
//!     method: Method::Transplant,
//!     environment: Environment::Greenhouse,
//!     area: Some(100.0),
//!     variety: None,
//!     notes: None,
//! });
//! assert_eq!(plan.tasks.len(), 9);
//! assert_eq!(
//!     plan.task("ventilation/humidity management").map(|t| t.due_date),
//!     Some(date(2024, 3, 19)),
//! );
//! ```

use jiff::{civil::Date, ToSpan};
use uuid::Uuid;

use crate::{
    models::{Plan, Task},
    params::CreatePlan,
};

pub mod factor;
pub mod template;


pub use factor::{environment_factor, factor};
use template::{environment_tasks, TaskTemplate, BASE_TASKS};

/// Length of generated plan IDs.
pub const PLAN_ID_LEN: usize = 8;

/// Generates a short random plan ID.
///
/// IDs are not meant to be unguessable; the store re-rolls on collision.
pub fn generate_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(PLAN_ID_LEN);
    id
}

/// Scales a template offset by the environment factor, rounding half-to-even.
pub fn scaled_offset(offset_days: i64, factor: f64) -> i64 {
    (offset_days as f64 * factor).round_ties_even() as i64
}

/// Due date for a template offset.
pub fn due_date(start_date: Date, offset_days: i64, factor: f64) -> Date {
    start_date.saturating_add(scaled_offset(offset_days, factor).days())
}

fn instantiate(template: &TaskTemplate, params: &CreatePlan, factor: f64) -> Task {
    Task {
        name: template.name.resolve(params.method).to_string(),
        stage: template.stage,
        due_date: due_date(params.start_date, template.offset_days, factor),
        checklist: template.checklist.iter().map(|item| item.to_string()).collect(),
        notes: None,
    }
}

/// Builds the dated task list for a planting plan, ordered by due date.
pub fn build_tasks(params: &CreatePlan) -> Vec<Task> {
    let ef = factor(params.environment);

    let mut tasks: Vec<Task> = BASE_TASKS
        .iter()
        .chain(environment_tasks(params.environment))
        .map(|template| instantiate(template, params, ef))
        .collect();

    // sort_by_key is stable: same-day tasks keep template order
    tasks.sort_by_key(|task| task.due_date);
    tasks
}

/// Generates a complete plan with a fresh ID.
pub fn generate(params: &CreatePlan) -> Plan {
    Plan {
        id: generate_id(),
        crop: params.crop.clone(),
        start_date: params.start_date,
        method: params.method,
        environment: params.environment,
        area: params.area,
        variety: params.variety.clone(),
        notes: params.notes.clone(),
        tasks: build_tasks(params),
    }
}
