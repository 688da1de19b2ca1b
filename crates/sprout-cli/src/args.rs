//! Command-line interface definitions using clap
//!
//! Argument structs carry the clap-specific attributes and convert into the
//! core parameter types, so `sprout-core` stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::{fmt, net::SocketAddr};

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use jiff::civil::Date;
use sprout_core::{
    models::{Environment, Method},
    params::CreatePlan,
};

/// Address the HTTP server binds to when neither `--addr` nor `SPROUT_ADDR`
/// is given.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8000";

/// Crop schedule generator and field advisory service
///
/// Sprout turns a planting decision (crop, start date, method, environment)
/// into a dated task timeline and answers field observations with advice.
/// Plans can be previewed offline, served over HTTP, or exposed to AI
/// assistants through an MCP stdio server.
#[derive(Parser)]
#[command(version, about, name = "sprout")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Sprout CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Preview a crop schedule without starting a server
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Start the HTTP API server
    Serve(ServeArgs),
    /// Start the MCP server on stdio
    Mcp,
}

/// Generate a crop schedule
///
/// CLI wrapper for CreatePlan. The schedule is generated locally and printed
/// as a timeline grouped by due date.
#[derive(ClapArgs)]
pub struct PlanArgs {
    /// Crop name, e.g. tomato
    pub crop: String,

    /// Sowing or transplanting date (YYYY-MM-DD)
    #[arg(short, long)]
    pub start_date: Date,

    /// Planting method
    #[arg(short, long, value_enum, default_value_t = MethodArg::Transplant)]
    pub method: MethodArg,

    /// Cultivation environment, which scales task timing
    #[arg(short, long, value_enum, default_value_t = EnvironmentArg::Open)]
    pub environment: EnvironmentArg,

    /// Cultivated area
    #[arg(long)]
    pub area: Option<f64>,

    /// Crop variety
    #[arg(long)]
    pub variety: Option<String>,

    /// Free-form notes attached to the plan
    #[arg(long)]
    pub notes: Option<String>,

    /// Print the plan as JSON instead of a timeline
    #[arg(long)]
    pub json: bool,
}

impl From<PlanArgs> for CreatePlan {
    fn from(val: PlanArgs) -> Self {
        CreatePlan {
            crop: val.crop,
            start_date: val.start_date,
            method: val.method.into(),
            environment: val.environment.into(),
            area: val.area,
            variety: val.variety,
            notes: val.notes,
        }
    }
}

/// Start the HTTP API server
#[derive(ClapArgs)]
pub struct ServeArgs {
    /// Socket address to listen on
    #[arg(long, env = "SPROUT_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: SocketAddr,
}

/// Command-line representation of planting methods
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum MethodArg {
    /// Direct seeding
    Seed,
    /// Transplanting seedlings
    Transplant,
    /// Grafted seedlings
    Grafting,
}

impl From<MethodArg> for Method {
    fn from(val: MethodArg) -> Self {
        match val {
            MethodArg::Seed => Method::Seed,
            MethodArg::Transplant => Method::Transplant,
            MethodArg::Grafting => Method::Grafting,
        }
    }
}

impl fmt::Display for MethodArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Method::from(*self))
    }
}

/// Command-line representation of cultivation environments
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum EnvironmentArg {
    /// Open field
    Open,
    /// Greenhouse, timing x0.9
    Greenhouse,
    /// Hydroponic system, timing x0.8
    Hydroponic,
}

impl From<EnvironmentArg> for Environment {
    fn from(val: EnvironmentArg) -> Self {
        match val {
            EnvironmentArg::Open => Environment::Open,
            EnvironmentArg::Greenhouse => Environment::Greenhouse,
            EnvironmentArg::Hydroponic => Environment::Hydroponic,
        }
    }
}

impl fmt::Display for EnvironmentArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Environment::from(*self))
    }
}
