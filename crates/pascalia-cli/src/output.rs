// Rust guideline compliant 2026-02-06

//! Output formatting module for the Pascalia CLI.
//!
//! This module renders calendar records and Pascha tables in the supported
//! output formats (JSON, table, plain text).

use crate::terminal::wrap_text;
use chrono::NaiveDate;
use pascalia_core::{CalendarDay, Caveat};
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for rendering engine output in different formats.
pub trait OutputFormatter {
    /// Formats a single calendar day in full.
    fn format_day(&self, day: &CalendarDay) -> String;

    /// Formats a sequence of calendar days, one row per day.
    fn format_days(&self, days: &[CalendarDay]) -> String;

    /// Formats a table of Pascha dates.
    fn format_pascha_table(&self, dates: &[(i32, NaiveDate)]) -> String;

    /// Formats a caveat attached to a result.
    fn format_caveat(&self, caveat: &Caveat) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Formats records as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_day(&self, day: &CalendarDay) -> String {
        serde_json::to_string_pretty(day)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize day" }).to_string())
    }

    fn format_days(&self, days: &[CalendarDay]) -> String {
        let output = json!({
            "days": days,
            "total": days.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize days" }).to_string())
    }

    fn format_pascha_table(&self, dates: &[(i32, NaiveDate)]) -> String {
        let rows: Vec<_> = dates
            .iter()
            .map(|(year, date)| json!({ "year": year, "pascha": date }))
            .collect();
        let output = json!({
            "pascha": rows,
            "total": rows.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize Pascha table" }).to_string())
    }

    fn format_caveat(&self, caveat: &Caveat) -> String {
        json!({ "caveat": caveat, "message": caveat.to_string() }).to_string()
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats records as human-readable tables.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn label(&self, label: &str, color: Color, text: &str) -> String {
        if !self.use_color {
            return format!("{}: {}", label, text);
        }

        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(buffer, "{}:", label);
        let _ = buffer.reset();
        let _ = write!(buffer, " {}", text);
        String::from_utf8_lossy(buffer.as_slice()).to_string()
    }
}

impl OutputFormatter for TableFormatter {
    fn format_day(&self, day: &CalendarDay) -> String {
        let mut output = String::new();

        output.push_str(&format!("Date:        {} ({})\n", day.date, day.date.format("%A")));
        output.push_str(&format!("Feast:       {}\n", wrap_text(&day.feast_name, 13)));
        output.push_str(&format!("Importance:  {}\n", day.importance_level));
        output.push_str(&format!("Fast:        {}\n", day.fast_type));
        output.push_str(&format!("Tradition:   {}\n", day.tradition));
        output.push_str(&format!("Description: {}\n", wrap_text(&day.description_short, 13)));
        output.push_str(&format!("Saints:      {}\n", wrap_text(&day.saints.join(", "), 13)));

        if let Some(readings) = &day.readings {
            output.push_str(&format!("Readings:    {}\n", readings.join("; ")));
        }

        output
    }

    fn format_days(&self, days: &[CalendarDay]) -> String {
        if days.is_empty() {
            return "No days found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Date", "Day", "Feast", "Fast", "Importance"]);

        for day in days {
            builder.push_record(vec![
                day.date.to_string(),
                day.date.format("%a").to_string(),
                day.feast_name.clone(),
                day.fast_type.to_string(),
                day.importance_level.to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_pascha_table(&self, dates: &[(i32, NaiveDate)]) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Year", "Pascha"]);
        for (year, date) in dates {
            builder.push_record(vec![year.to_string(), date.format("%Y-%m-%d (%b %e)").to_string()]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_caveat(&self, caveat: &Caveat) -> String {
        self.label("Warning", Color::Yellow, &caveat.to_string())
    }

    fn format_error(&self, error: &str) -> String {
        self.label("Error", Color::Red, error)
    }
}

/// Plain text output formatter.
///
/// Formats records as whitespace-separated lines without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_day(&self, day: &CalendarDay) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", day.id));
        output.push_str(&format!("{}\n", day.feast_name));
        output.push_str(&format!("{}\n", day.importance_level));
        output.push_str(&format!("{}\n", day.fast_type));
        output.push_str(&format!("{}\n", day.description_short));

        output
    }

    fn format_days(&self, days: &[CalendarDay]) -> String {
        if days.is_empty() {
            return "No days found.".to_string();
        }

        let mut output = String::new();
        for day in days {
            output.push_str(&format!(
                "{} {} {} {}\n",
                day.date, day.fast_type, day.importance_level, day.feast_name
            ));
        }
        output
    }

    fn format_pascha_table(&self, dates: &[(i32, NaiveDate)]) -> String {
        dates
            .iter()
            .map(|(year, date)| format!("{} {}\n", year, date))
            .collect()
    }

    fn format_caveat(&self, caveat: &Caveat) -> String {
        format!("Warning: {}", caveat)
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}
