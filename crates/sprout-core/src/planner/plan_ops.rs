//! Plan operations for the Planner.

use std::sync::Arc;

use log::{debug, info};

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    models::Plan,
    params::{CreatePlan, Id},
    schedule,
};

impl Planner {
    /// Generates a schedule for the planting plan and stores it.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if the parameters fail
    /// validation; nothing is stored in that case.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<Arc<Plan>> {
        params.validate()?;

        let plan = self.store.insert(schedule::generate(params)).await;
        info!(
            "Created plan {} for {} ({}, {}) with {} tasks",
            plan.id,
            plan.crop,
            plan.method,
            plan.environment,
            plan.tasks.len()
        );
        Ok(plan)
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Arc<Plan>>> {
        debug!("get_plan: {}", params.id);
        Ok(self.store.get(&params.id).await)
    }

    /// Retrieves a plan by its ID, treating absence as an error.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` if no plan has the ID.
    pub async fn show_plan(&self, params: &Id) -> Result<Arc<Plan>> {
        self.get_plan(params)
            .await?
            .ok_or_else(|| PlannerError::plan_not_found(&params.id))
    }

    /// Number of plans created by this process so far.
    pub async fn plan_count(&self) -> usize {
        self.store.len().await
    }
}
