//! Offline command handlers
//!
//! The `plan` command runs the same planner the servers use against a
//! process-local store, so a preview matches what `POST /api/plans` would
//! return apart from the generated ID.

use anyhow::{Context, Result};
use log::debug;
use sprout_core::{params::CreatePlan, Planner};

use crate::{args::PlanArgs, renderer::TerminalRenderer};

/// Executes CLI commands against a planner and renders their output
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Generate a plan and print it as a timeline, or as JSON with `--json`.
    pub async fn preview_plan(&self, args: PlanArgs) -> Result<()> {
        let json = args.json;
        let params = CreatePlan::from(args);
        debug!("preview_plan: {:?}", params);

        let plan = self
            .planner
            .create_plan(&params)
            .await
            .context("Failed to generate plan")?;

        if json {
            let output =
                serde_json::to_string_pretty(&*plan).context("Failed to serialize plan")?;
            println!("{output}");
            Ok(())
        } else {
            self.renderer.render(&plan.to_string())
        }
    }
}
