//! MCP tool handlers implementation

use std::borrow::Cow;

use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use sprout_core::{
    display::{CreateResult, OperationStatus},
    params as core, Planner,
};

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types with serde integration
///
/// Passes deserialization and schema generation through to the wrapped core
/// type, keeping rmcp out of `sprout-core`.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(pub(crate) T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreatePlan = McpParams<core::CreatePlan>;
pub type AddObservation = McpParams<core::AddObservation>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Planner,
}

impl McpHandlers {
    pub fn new(planner: Planner) -> Self {
        Self { planner }
    }

    pub async fn create_plan(&self, Parameters(params): Parameters<CreatePlan>) -> McpResult {
        debug!("create_plan: {:?}", params);

        let plan = self
            .planner
            .create_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create plan", &e))?;

        let result = CreateResult::new(plan);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn show_plan(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_plan: {:?}", params);

        let plan = self
            .planner
            .show_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get plan", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            plan.to_string(),
        )]))
    }

    pub async fn add_observation(
        &self,
        Parameters(params): Parameters<AddObservation>,
    ) -> McpResult {
        debug!("add_observation: {:?}", params);

        let result = self
            .planner
            .add_observation(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add observation", &e))?;

        // An unknown plan is reported in the text, not as a protocol error.
        let status = OperationStatus::from(&result);
        let content = vec![Content::text(status.to_string())];
        Ok(if result.ok {
            CallToolResult::success(content)
        } else {
            CallToolResult::error(content)
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rmcp::model::ErrorCode;
    use sprout_core::{
        models::{Environment, Method},
        params::Observation,
    };

    use super::*;

    fn text(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|content| content.as_text())
            .map(|text| text.text.clone())
            .collect()
    }

    fn create_params() -> CreatePlan {
        McpParams(core::CreatePlan {
            crop: "tomato".to_string(),
            start_date: date(2024, 3, 1),
            method: Method::Transplant,
            environment: Environment::Greenhouse,
            area: Some(100.0),
            variety: None,
            notes: None,
        })
    }

    fn observation(plan_id: &str, symptom: &str) -> AddObservation {
        McpParams(core::AddObservation {
            plan_id: plan_id.to_string(),
            observation: Observation {
                date: date(2024, 3, 12),
                task_name: "establishment check".to_string(),
                symptom: symptom.to_string(),
                severity: 2,
                note: None,
            },
        })
    }

    #[tokio::test]
    async fn test_create_then_show() {
        let planner = Planner::new();
        let handlers = McpHandlers::new(planner.clone());

        let created = handlers
            .create_plan(Parameters(create_params()))
            .await
            .expect("create_plan should succeed");
        let output = text(&created);
        assert!(output.starts_with("Created plan with ID: "));
        assert!(output.contains("ventilation/humidity management"));

        let store = planner.store();
        assert_eq!(store.len().await, 1);
        let id = output
            .lines()
            .next()
            .and_then(|line| line.strip_prefix("Created plan with ID: "))
            .expect("id line")
            .to_string();

        let shown = handlers
            .show_plan(Parameters(McpParams(core::Id::new(&id))))
            .await
            .expect("show_plan should succeed");
        assert!(text(&shown).starts_with(&format!("# tomato (ID: {id})")));
    }

    #[tokio::test]
    async fn test_show_unknown_plan_is_resource_not_found() {
        let handlers = McpHandlers::new(Planner::new());
        let err = handlers
            .show_plan(Parameters(McpParams(core::Id::new("deadbeef"))))
            .await
            .expect_err("unknown plan should fail");
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_observation_feedback_and_unknown_plan() {
        let planner = Planner::new();
        let handlers = McpHandlers::new(planner.clone());
        let plan = planner
            .create_plan(create_params().as_ref())
            .await
            .expect("create_plan should succeed");

        let advice = handlers
            .add_observation(Parameters(observation(&plan.id, "powdery mildew")))
            .await
            .expect("add_observation should succeed");
        assert_ne!(advice.is_error, Some(true));
        assert!(text(&advice).contains("high-humidity"));

        let missing = handlers
            .add_observation(Parameters(observation("deadbeef", "aphid")))
            .await
            .expect("unknown plan is not a protocol error");
        assert_eq!(missing.is_error, Some(true));
        assert_eq!(text(&missing), "Error: plan not found\n");
    }
}
