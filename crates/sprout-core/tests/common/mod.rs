use jiff::civil::{date, Date};
use sprout_core::{
    models::{Environment, Method},
    params::{AddObservation, CreatePlan, Observation},
};

/// Helper function to build plan parameters anchored on 2024-03-01
pub fn create_params(crop: &str, method: Method, environment: Environment) -> CreatePlan {
    CreatePlan {
        crop: crop.to_string(),
        start_date: date(2024, 3, 1),
        method,
        environment,
        area: None,
        variety: None,
        notes: None,
    }
}

/// Helper function to build an observation request
pub fn observation(plan_id: &str, symptom: &str, severity: u8) -> AddObservation {
    AddObservation {
        plan_id: plan_id.to_string(),
        observation: Observation {
            date: observed_on(),
            task_name: "transplanting".to_string(),
            symptom: symptom.to_string(),
            severity,
            note: None,
        },
    }
}

fn observed_on() -> Date {
    date(2024, 3, 10)
}
