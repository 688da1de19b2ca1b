//! Sprout CLI Application
//!
//! Command-line entry point for the crop schedule service: offline plan
//! previews, the HTTP API, and the MCP stdio server.

mod args;
mod cli;
mod mcp;
mod renderer;
mod server;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, SproutMcpServer};
use renderer::TerminalRenderer;
use server::run_http_server;
use sprout_core::Planner;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();

    // One store per process; plans are gone when it exits.
    let planner = Planner::new();

    info!("Sprout started");

    match command {
        Plan(args) => {
            Cli::new(planner, TerminalRenderer::new(!no_color))
                .preview_plan(args)
                .await
        }
        Serve(args) => run_http_server(planner, args.addr)
            .await
            .context("HTTP server failed"),
        Mcp => {
            info!("Starting Sprout MCP server");
            run_stdio_server(SproutMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
    }
}
