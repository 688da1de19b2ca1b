//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::Plan;

/// Wrapper type for displaying the result of a plan creation.
///
/// Prefixes the rendered plan with a confirmation line carrying the new ID,
/// which clients need for follow-up lookups and observations.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use sprout_core::{
///     display::CreateResult,
///     models::{Environment, Method},
///     params::CreatePlan,
///     schedule,
/// };
///
/// let plan = schedule::generate(&CreatePlan {
///     crop: "melon".to_string(),
///     start_date: date(2024, 4, 20),
///     method: Method::Grafting,
///     environment: Environment::Open,
///     area: None,
///     variety: None,
///     notes: None,
/// });
/// let output = CreateResult::new(&plan).to_string();
/// assert!(output.starts_with(&format!("Created plan with ID: {}", plan.id)));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<P: AsRef<Plan>> fmt::Display for CreateResult<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.resource.as_ref();
        writeln!(f, "Created plan with ID: {}", plan.id)?;
        writeln!(f)?;
        write!(f, "{plan}")
    }
}
