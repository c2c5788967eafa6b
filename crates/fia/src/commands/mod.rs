//! Command implementations for fia CLI.

pub mod ask;
pub mod config;
pub mod history;
pub mod memory;
pub mod outfit;

use chrono::{DateTime, Local, TimeZone};
use colored::Colorize;
use fia_core::MemoryRecord;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while waiting on a remote call, or a hidden bar when disabled.
pub(crate) fn spinner(enabled: bool, message: &'static str) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.magenta} {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message);
    pb
}

/// Render a millisecond timestamp relative to `now`.
///
/// Under an hour is "Just now", then "Xh ago" and "Xd ago" for the first
/// week; older entries fall back to `format` in local time.
pub(crate) fn format_timestamp(millis: i64, now: DateTime<Local>, format: &str) -> String {
    if millis <= 0 {
        return "unknown time".to_string();
    }
    let Some(dt) = Local.timestamp_millis_opt(millis).single() else {
        return "unknown time".to_string();
    };

    let elapsed = now.signed_duration_since(dt);
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days < 7 {
        format!("{}d ago", days)
    } else {
        dt.format(format).to_string()
    }
}

/// Print memory records the way `search` and `history` list them.
pub(crate) fn print_records(records: &[MemoryRecord], time_format: &str) {
    let now = Local::now();
    for (i, record) in records.iter().enumerate() {
        let id = if record.id.is_empty() { "-" } else { record.id.as_str() };
        println!(
            "{} {} {}",
            format!("{:>2}.", i + 1).dimmed(),
            format_timestamp(record.timestamp, now, time_format).cyan(),
            format!("[{}]", id).dimmed()
        );
        for line in record.content.lines() {
            println!("    {}", line);
        }
    }
}
