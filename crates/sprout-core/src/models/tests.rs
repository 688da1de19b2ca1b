#[cfg(test)]
mod model_tests {
    use jiff::civil::date;
    use serde_json::json;

    use crate::models::{Environment, Method, ObservationResult, Plan, Stage, Task};

    fn create_test_task(name: &str, stage: Stage, day: i8) -> Task {
        Task {
            name: name.to_string(),
            stage,
            due_date: date(2024, 3, day),
            checklist: vec!["first item".to_string(), "second item".to_string()],
            notes: None,
        }
    }

    fn create_test_plan() -> Plan {
        Plan {
            id: "a1b2c3d4".to_string(),
            crop: "tomato".to_string(),
            start_date: date(2024, 3, 1),
            method: Method::Transplant,
            environment: Environment::Greenhouse,
            area: Some(100.0),
            variety: Some("cherry".to_string()),
            notes: None,
            tasks: vec![
                create_test_task("transplanting", Stage::Transplant, 1),
                create_test_task("establishment care", Stage::Establish, 5),
            ],
        }
    }

    #[test]
    fn test_enum_serialization_is_lowercase() {
        assert_eq!(serde_json::to_value(Stage::Veg).unwrap(), json!("veg"));
        assert_eq!(serde_json::to_value(Method::Grafting).unwrap(), json!("grafting"));
        assert_eq!(
            serde_json::to_value(Environment::Hydroponic).unwrap(),
            json!("hydroponic")
        );
    }

    #[test]
    fn test_unknown_environment_is_rejected() {
        let result = serde_json::from_value::<Environment>(json!("orbital"));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("Greenhouse".parse::<Environment>(), Ok(Environment::Greenhouse));
        assert_eq!("SEED".parse::<Method>(), Ok(Method::Seed));
        assert_eq!("Flower".parse::<Stage>(), Ok(Stage::Flower));
        assert_eq!(
            "swamp".parse::<Environment>(),
            Err("Invalid environment: swamp".to_string())
        );
    }

    #[test]
    fn test_plan_json_shape() {
        let plan = create_test_plan();
        let value = serde_json::to_value(&plan).unwrap();

        assert_eq!(value["id"], "a1b2c3d4");
        assert_eq!(value["start_date"], "2024-03-01");
        assert_eq!(value["method"], "transplant");
        assert_eq!(value["environment"], "greenhouse");
        assert_eq!(value["area"], 100.0);
        assert_eq!(value["notes"], serde_json::Value::Null);
        assert_eq!(value["tasks"][1]["due_date"], "2024-03-05");
        assert_eq!(value["tasks"][1]["stage"], "establish");
    }

    #[test]
    fn test_plan_task_lookup() {
        let plan = create_test_plan();
        assert_eq!(
            plan.task("establishment care").map(|t| t.stage),
            Some(Stage::Establish)
        );
        assert!(plan.task("harvest").is_none());
        assert_eq!(plan.end_date(), Some(date(2024, 3, 5)));
    }

    #[test]
    fn test_observation_result_constructors() {
        let advice = ObservationResult::advice("keep watching");
        assert!(advice.ok);
        assert_eq!(advice.feedback, "keep watching");

        let missing = ObservationResult::plan_not_found();
        assert_eq!(
            serde_json::to_value(&missing).unwrap(),
            json!({"ok": false, "feedback": "plan not found"})
        );
    }
}
