//! MCP server implementation for Sprout
//!
//! Exposes plan generation and observation advice as Model Context Protocol
//! tools over stdio. The server process owns its own plan store.

use std::future::Future;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use sprout_core::Planner;
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{AddObservation, CreatePlan, Id, McpResult};

/// MCP server for Sprout
#[derive(Clone)]
pub struct SproutMcpServer {
    planner: Planner,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SproutMcpServer {
    /// Create a new Sprout MCP server
    pub fn new(planner: Planner) -> Self {
        Self {
            planner,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "create_plan",
        description = "Generate a crop schedule. Provide crop, start_date (YYYY-MM-DD), method (seed, transplant or grafting) and environment (open, greenhouse or hydroponic); area, variety and notes are optional. Greenhouse and hydroponic plans run faster (timing x0.9 and x0.8) and get an extra environment task. Returns the plan ID and a timeline of tasks grouped by due date."
    )]
    async fn create_plan(&self, params: Parameters<CreatePlan>) -> McpResult {
        self.handlers().create_plan(params).await
    }

    #[tool(
        name = "show_plan",
        description = "Show a previously generated plan by ID, with every task's stage, due date and checklist."
    )]
    async fn show_plan(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_plan(params).await
    }

    #[tool(
        name = "add_observation",
        description = "Report a field observation against a plan and get advice. Provide plan_id, date (YYYY-MM-DD), task_name, a free-text symptom and severity from 1 (minor) to 3 (severe). Pest, fungal and yellowing keywords (English or Korean) select specific advice; severity 3 without a keyword triggers isolation advice. The plan itself is not changed."
    )]
    async fn add_observation(&self, params: Parameters<AddObservation>) -> McpResult {
        self.handlers().add_observation(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for SproutMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "sprout".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Sprout generates crop schedules and gives advice on field observations.

## Core Concepts
- **Plans**: a dated schedule of tasks for one crop, anchored on a start date
- **Tasks**: actions tagged with a growth stage (transplant, establish, veg, flower, harvest) and a checklist
- **Observations**: symptoms reported against a plan, answered with advice

## Workflow
1. Create a plan with `create_plan` and keep the returned ID
2. Review the timeline with `show_plan`
3. Report problems with `add_observation` as the season progresses

Plans live only as long as this server process."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: SproutMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Sprout MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
