//! Environment timing factors.
//!
//! Protected and soilless cultivation move a crop through its stages faster
//! than open field. Every task offset is multiplied by the factor of the plan's
//! environment before it is turned into a date.

use crate::models::Environment;

/// Factor applied when the environment is unknown.
pub const DEFAULT_FACTOR: f64 = 1.0;

/// Timing multiplier for an environment.
pub fn factor(environment: Environment) -> f64 {
    match environment {
        Environment::Open => 1.0,
        Environment::Greenhouse => 0.9,
        Environment::Hydroponic => 0.8,
    }
}

/// Timing multiplier for a raw environment name.
///
/// Names are matched case-insensitively; anything unrecognized falls back to
/// [`DEFAULT_FACTOR`].
pub fn environment_factor(name: &str) -> f64 {
    name.parse::<Environment>()
        .map(factor)
        .unwrap_or(DEFAULT_FACTOR)
}
