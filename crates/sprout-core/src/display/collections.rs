//! Collection wrapper types for displaying groups of tasks.

use std::{collections::BTreeMap, fmt};

use jiff::civil::Date;

use super::dates::HumanDate;
use crate::models::Task;

/// Newtype wrapper that renders tasks as a timeline grouped by due date.
///
/// Each date becomes a `##` section headed by the date and the number of
/// tasks due that day; tasks keep their relative order within a day.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use sprout_core::{
///     display::Timeline,
///     models::{Stage, Task},
/// };
///
/// let tasks = vec![
///     Task {
///         name: "sowing".to_string(),
///         stage: Stage::Transplant,
///         due_date: date(2024, 5, 1),
///         checklist: vec!["seedling vigor check".to_string()],
///         notes: None,
///     },
/// ];
/// let output = Timeline(&tasks).to_string();
/// assert!(output.contains("## Wed, May 1, 2024 (1 task)"));
/// assert!(output.contains("- [ ] seedling vigor check"));
/// ```
pub struct Timeline<'a>(pub &'a [Task]);

impl<'a> Timeline<'a> {
    /// Tasks grouped by due date, earliest first.
    pub fn by_date(&self) -> BTreeMap<Date, Vec<&'a Task>> {
        let mut groups: BTreeMap<Date, Vec<&'a Task>> = BTreeMap::new();
        for task in self.0 {
            groups.entry(task.due_date).or_default().push(task);
        }
        groups
    }
}

impl fmt::Display for Timeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks scheduled.");
        }

        for (date, tasks) in self.by_date() {
            let noun = if tasks.len() == 1 { "task" } else { "tasks" };
            writeln!(f, "## {} ({} {noun})", HumanDate(&date), tasks.len())?;
            writeln!(f)?;
            for task in tasks {
                write!(f, "{task}")?;
            }
        }
        Ok(())
    }
}
