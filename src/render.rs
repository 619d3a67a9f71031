//! TUI rendering traits for plan2ics types.
//!
//! Extension traits that add colored terminal rendering to plan2ics-core
//! types using owo_colors.

use owo_colors::OwoColorize;
use plan2ics_core::{DayEntry, Reading};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Reading {
    fn render(&self) -> String {
        if !self.has_book() {
            // Tokens that came before any book name
            return format!("? {}", self.passages.join(" ")).red().to_string();
        }

        if self.passages.is_empty() {
            return self.book.bold().to_string();
        }

        format!("{} {}", self.book.bold(), self.passage_list())
    }
}

impl Render for DayEntry {
    fn render(&self) -> String {
        let label = format!("Day {:>3}", self.day);
        let readings = self
            .readings
            .iter()
            .map(Render::render)
            .collect::<Vec<_>>()
            .join(" · ".dimmed().to_string().as_str());

        format!("  {}  {}", label.cyan(), readings)
    }
}

/// Heading shown when the plan enters a new period
pub fn render_period(period: &str) -> String {
    format!("📖 {}", period).bold().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> String {
        strip_ansi_escapes::strip_str(text)
    }

    #[test]
    fn reading_renders_book_and_passages() {
        let reading = Reading::with_passages("1 Samuel", ["2:1-10", "17:1"]);
        assert_eq!(plain(&reading.render()), "1 Samuel 2:1-10, 17:1");
    }

    #[test]
    fn placeholder_reading_is_flagged() {
        let reading = Reading::with_passages("", ["Foo", "Bar"]);
        assert_eq!(plain(&reading.render()), "? Foo Bar");
    }

    #[test]
    fn day_entry_lists_readings_on_one_line() {
        let day = DayEntry {
            day: 7,
            period: String::new(),
            readings: vec![
                Reading::with_passages("Genesis", ["16", "17"]),
                Reading::new("Jude"),
            ],
            line: 9,
        };
        assert_eq!(plain(&day.render()), "  Day   7  Genesis 16, 17 · Jude");
    }
}
