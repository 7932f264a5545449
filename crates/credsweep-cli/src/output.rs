//! Output formatting for the CLI.

use chrono::{DateTime, Utc};
use colored::*;
use credsweep_domain::CredentialRecord;
use credsweep_janitor::{format_significant, InventoryStats};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(message, "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(message, "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(message, "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(message, "yellow")
    }

    /// Format the line shown for a record under review.
    pub fn record_line(&self, record: &CredentialRecord) -> String {
        format!(
            "{} {} : {} KiB",
            format_timestamp(record.last_written_micros()),
            self.colorize(&record.name, "cyan"),
            format_significant(f64::from(record.payload_size) / 1024.0, 2)
        )
    }

    /// Format inventory totals as a table.
    pub fn inventory_table(&self, stats: &InventoryStats) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Credentials", "Blob size", "Estimated size"]);
        builder.push_record([
            stats.record_count.to_string(),
            format!("{} KiB", format_significant(stats.total_payload_kib(), 5)),
            format!("{} KiB", format_significant(stats.estimated_total_kib(), 5)),
        ]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Render Unix microseconds as a UTC timestamp with microsecond precision.
///
/// Instants chrono cannot represent fall back to the raw microsecond count.
pub fn format_timestamp(micros: i64) -> String {
    DateTime::<Utc>::from_timestamp_micros(micros)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S%.6f").to_string())
        .unwrap_or_else(|| format!("{micros}us"))
}
