//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer and MCP clients can present it
//! directly.

use std::fmt;

use super::{collections::Timeline, dates::HumanDate};
use crate::{
    models::{Environment, Method, ObservationResult, Plan, Stage, Task},
    schedule::factor,
};

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.name, self.stage)?;
        writeln!(f)?;

        if !self.checklist.is_empty() {
            for item in &self.checklist {
                writeln!(f, "- [ ] {item}")?;
            }
            writeln!(f)?;
        }

        if let Some(notes) = &self.notes {
            writeln!(f, "{notes}")?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} (ID: {})", self.crop, self.id)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Start: {}", HumanDate(&self.start_date))?;
        writeln!(f, "- Method: {}", self.method)?;
        writeln!(
            f,
            "- Environment: {} (timing x{})",
            self.environment,
            factor(self.environment)
        )?;
        if let Some(variety) = &self.variety {
            writeln!(f, "- Variety: {variety}")?;
        }
        if let Some(area) = self.area {
            writeln!(f, "- Area: {area}")?;
        }
        if let Some(end) = self.end_date() {
            writeln!(
                f,
                "- Tasks: {} through {}",
                self.tasks.len(),
                HumanDate(&end)
            )?;
        }

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        writeln!(f)?;
        write!(f, "{}", Timeline(&self.tasks))
    }
}

impl fmt::Display for ObservationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", super::OperationStatus::from(self))
    }
}
