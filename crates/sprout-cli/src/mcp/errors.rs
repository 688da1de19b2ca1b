//! Error handling utilities for MCP server

use rmcp::ErrorData;
use sprout_core::PlannerError;

/// Helper to convert planner errors to MCP errors
///
/// Unknown plans become resource-not-found and validation failures become
/// invalid-params, so clients can tell bad input from a missing plan.
pub fn to_mcp_error(message: &str, error: &PlannerError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        PlannerError::PlanNotFound { .. } => ErrorData::resource_not_found(text, None),
        PlannerError::InvalidInput { .. } | PlannerError::Serialization { .. } => {
            ErrorData::invalid_params(text, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_error_codes() {
        let not_found = to_mcp_error("Failed to get plan", &PlannerError::plan_not_found("x1"));
        assert_eq!(not_found.code, ErrorCode::RESOURCE_NOT_FOUND);
        assert!(not_found.message.contains("Plan with ID x1 not found"));

        let invalid = to_mcp_error(
            "Failed to create plan",
            &PlannerError::invalid_input("area").with_reason("must be positive"),
        );
        assert_eq!(invalid.code, ErrorCode::INVALID_PARAMS);
    }
}
