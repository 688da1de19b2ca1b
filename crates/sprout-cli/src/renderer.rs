//! Terminal rendering module for plan timelines
//!
//! Plans reach the terminal as the markdown produced by their Display
//! implementations. Headings are colored by level so the date sections of a
//! timeline stand out; everything else goes through termimad's inline skin.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match heading_color(line) {
                Some(color) => println!("{color}{line}{RESET}"),
                None => {
                    self.skin.print_inline(&checkbox(line));
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// ANSI color for a markdown heading line: plan title, date section, task.
fn heading_color(line: &str) -> Option<&'static str> {
    if line.starts_with("### ") {
        Some("\x1b[36m")
    } else if line.starts_with("## ") {
        Some("\x1b[34m")
    } else if line.starts_with("# ") {
        Some("\x1b[32;1m")
    } else {
        None
    }
}

/// Replaces an unchecked markdown checklist marker with a box glyph.
fn checkbox(line: &str) -> String {
    match line.strip_prefix("- [ ] ") {
        Some(item) => format!("  ☐ {item}"),
        None => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_heading_levels_get_distinct_colors() {
        let title = heading_color("# tomato (ID: a1b2c3d4)");
        let date = heading_color("## Fri, Mar 1, 2024 (1 task)");
        let task = heading_color("### transplanting (transplant)");
        assert!(title.is_some() && date.is_some() && task.is_some());
        assert_ne!(title, date);
        assert_ne!(date, task);
        assert_eq!(heading_color("- Start: Fri, Mar 1, 2024"), None);
        assert_eq!(heading_color("#hashtag"), None);
    }

    #[test]
    fn test_checkbox() {
        assert_eq!(checkbox("- [ ] root check"), "  ☐ root check");
        assert_eq!(checkbox("- Method: seed"), "- Method: seed");
    }
}
