//! Observation operations for the Planner.

use log::{debug, info};

use super::Planner;
use crate::{
    advisory,
    error::Result,
    models::ObservationResult,
    params::AddObservation,
};

impl Planner {
    /// Classifies an observation made on a stored plan.
    ///
    /// An unknown plan is not an error here: the result comes back with
    /// `ok: false` and the feedback `"plan not found"`. Plan lookups through
    /// [`Planner::show_plan`] report the same condition as
    /// `PlannerError::PlanNotFound`; the two paths stay separate.
    ///
    /// The observation itself is not stored.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if the severity is out of range.
    pub async fn add_observation(&self, params: &AddObservation) -> Result<ObservationResult> {
        let obs = &params.observation;
        obs.validate()?;

        let Some(plan) = self.store.get(&params.plan_id).await else {
            info!("Observation for unknown plan {}", params.plan_id);
            return Ok(ObservationResult::plan_not_found());
        };

        let rule = advisory::classify_rule(obs);
        debug!(
            "Observation on plan {} task '{}' matched {:?}",
            plan.id, obs.task_name, rule
        );
        Ok(ObservationResult::advice(advisory::classify(&plan, obs)))
    }
}
