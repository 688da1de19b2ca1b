//! Tests for the planner module.

use jiff::civil::date;

use super::*;
use crate::{
    advisory::rules::GREENHOUSE_PEST_ADVICE,
    error::PlannerError,
    models::{Environment, Method},
    params::{AddObservation, CreatePlan, Id, Observation},
};

fn tomato_params() -> CreatePlan {
    CreatePlan {
        crop: "tomato".to_string(),
        start_date: date(2024, 3, 1),
        method: Method::Transplant,
        environment: Environment::Greenhouse,
        area: Some(100.0),
        variety: None,
        notes: None,
    }
}

fn observe(plan_id: &str, symptom: &str, severity: u8) -> AddObservation {
    AddObservation {
        plan_id: plan_id.to_string(),
        observation: Observation {
            date: date(2024, 3, 20),
            task_name: "ventilation/humidity management".to_string(),
            symptom: symptom.to_string(),
            severity,
            note: None,
        },
    }
}

#[tokio::test]
async fn test_create_plan_stores_plan() {
    let planner = Planner::new();

    let plan = planner
        .create_plan(&tomato_params())
        .await
        .expect("Failed to create plan");

    assert_eq!(plan.tasks.len(), 9);
    assert_eq!(planner.plan_count().await, 1);

    let fetched = planner
        .get_plan(&Id::new(&plan.id))
        .await
        .expect("Failed to get plan")
        .expect("Plan should exist");
    assert_eq!(*fetched, *plan);
}

#[tokio::test]
async fn test_create_plan_rejects_invalid_area() {
    let planner = Planner::new();
    let mut params = tomato_params();
    params.area = Some(-1.0);

    let err = planner.create_plan(&params).await.unwrap_err();
    assert!(matches!(err, PlannerError::InvalidInput { .. }));
    assert_eq!(planner.plan_count().await, 0);
}

#[tokio::test]
async fn test_get_plan_unknown_id() {
    let planner = Planner::new();

    let plan = planner
        .get_plan(&Id::new("missing1"))
        .await
        .expect("Lookup should not fail");
    assert!(plan.is_none());

    let err = planner.show_plan(&Id::new("missing1")).await.unwrap_err();
    assert!(matches!(err, PlannerError::PlanNotFound { ref id } if id == "missing1"));
}

#[tokio::test]
async fn test_add_observation_unknown_plan_is_not_an_error() {
    let planner = Planner::new();

    let result = planner
        .add_observation(&observe("nope0000", "aphids", 2))
        .await
        .expect("Unknown plan must not raise");

    assert!(!result.ok);
    assert_eq!(result.feedback, "plan not found");
}

#[tokio::test]
async fn test_add_observation_returns_feedback() {
    let planner = Planner::new();
    let plan = planner.create_plan(&tomato_params()).await.unwrap();

    let result = planner
        .add_observation(&observe(&plan.id, "aphid infestation", 2))
        .await
        .unwrap();

    assert!(result.ok);
    assert_eq!(result.feedback, GREENHOUSE_PEST_ADVICE);
}

#[tokio::test]
async fn test_add_observation_does_not_mutate_plan() {
    let planner = Planner::new();
    let plan = planner.create_plan(&tomato_params()).await.unwrap();

    planner
        .add_observation(&observe(&plan.id, "gray mold", 3))
        .await
        .unwrap();

    let after = planner.show_plan(&Id::new(&plan.id)).await.unwrap();
    assert_eq!(*after, *plan);
    assert_eq!(planner.plan_count().await, 1);
}

#[tokio::test]
async fn test_add_observation_rejects_out_of_range_severity() {
    let planner = Planner::new();
    let plan = planner.create_plan(&tomato_params()).await.unwrap();

    let err = planner
        .add_observation(&observe(&plan.id, "wilting", 5))
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_new_planner_starts_with_empty_store() {
    let first = Planner::new();
    first.create_plan(&tomato_params()).await.unwrap();

    // Nothing survives into a fresh planner: plans only live as long as the
    // store that holds them.
    let second = Planner::new();
    assert_eq!(second.plan_count().await, 0);
}

#[tokio::test]
async fn test_planners_sharing_a_store() {
    let store = PlanStore::new();
    let writer = Planner::with_store(store.clone());
    let reader = Planner::with_store(store);

    let plan = writer.create_plan(&tomato_params()).await.unwrap();
    assert!(reader.get_plan(&Id::new(&plan.id)).await.unwrap().is_some());
}
