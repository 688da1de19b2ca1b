//! In-memory plan storage.
//!
//! The store is process-wide state with an explicit lifecycle: it is created
//! empty when the process starts, shared by every request handler through the
//! [`Planner`](crate::Planner), and discarded when the process exits. Nothing
//! is written to disk, so every plan is lost on restart.
//!
//! A single lock guards the whole map. Plans are immutable once inserted and
//! are handed out as [`Arc<Plan>`], so readers never hold the lock while using
//! a plan.

use std::{collections::HashMap, sync::Arc};

use log::debug;
use tokio::sync::RwLock;

use crate::{models::Plan, schedule::generate_id};

/// Keyed storage from plan ID to plan.
///
/// Cloning is cheap and yields a handle to the same map.
#[derive(Debug, Clone, Default)]
pub struct PlanStore {
    plans: Arc<RwLock<HashMap<String, Arc<Plan>>>>,
}

impl PlanStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a plan and returns the stored copy.
    ///
    /// If the plan's ID is already taken a new one is generated, so the
    /// returned plan's ID may differ from the one passed in.
    pub async fn insert(&self, mut plan: Plan) -> Arc<Plan> {
        let mut plans = self.plans.write().await;
        while plans.contains_key(&plan.id) {
            debug!("plan id {} already taken, generating another", plan.id);
            plan.id = generate_id();
        }
        let plan = Arc::new(plan);
        plans.insert(plan.id.clone(), Arc::clone(&plan));
        plan
    }

    /// Retrieves a plan by ID.
    pub async fn get(&self, id: &str) -> Option<Arc<Plan>> {
        self.plans.read().await.get(id).cloned()
    }

    /// Number of stored plans.
    pub async fn len(&self) -> usize {
        self.plans.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.plans.read().await.is_empty()
    }
}
