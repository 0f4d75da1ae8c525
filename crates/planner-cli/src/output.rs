//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use planner_domain::Priority;
use planner_extractor::ExtractionResult;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an extraction result.
    pub fn format_extraction(&self, result: &ExtractionResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Table => Ok(self.format_extraction_table(result)),
        }
    }

    /// Format an extraction result as a field/value table.
    fn format_extraction_table(&self, result: &ExtractionResult) -> String {
        let task = &result.task;
        let none = "-".to_string();

        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["Title".to_string(), task.title.clone()]);
        builder.push_record([
            "Description".to_string(),
            task.description.clone().unwrap_or_else(|| none.clone()),
        ]);
        builder.push_record(["Priority".to_string(), self.priority_label(task.priority)]);
        builder.push_record([
            "Due".to_string(),
            task.due_date
                .map(|d| d.format("%Y-%m-%d (%A)").to_string())
                .unwrap_or_else(|| none.clone()),
        ]);
        builder.push_record([
            "Estimate".to_string(),
            task.estimate.map(format_minutes).unwrap_or_else(|| none.clone()),
        ]);
        builder.push_record([
            "Reminders".to_string(),
            if task.reminders.is_empty() {
                none.clone()
            } else {
                task.reminders.join(", ")
            },
        ]);
        builder.push_record(["Status".to_string(), task.status.as_str().to_string()]);
        if let Some(list_id) = result.list_id {
            builder.push_record(["List".to_string(), list_id.to_string()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a normalized time.
    pub fn format_time(&self, time: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({ "time": time }))?),
            OutputFormat::Table => Ok(time.to_string()),
        }
    }

    /// Priority name, colored by urgency.
    fn priority_label(&self, priority: Priority) -> String {
        let label = format!("{} ({})", priority.as_str(), priority.level());
        match priority {
            Priority::High => self.colorize(&label, "red"),
            Priority::Medium => self.colorize(&label, "yellow"),
            Priority::Low => self.colorize(&label, "blue"),
            Priority::None => label,
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Render a minute count as hours and minutes.
pub fn format_minutes(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}
