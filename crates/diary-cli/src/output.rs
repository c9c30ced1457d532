//! Output formatting helpers for the CLI.

use diary_core::storage::Entry;

use crate::helpers::OutputFormat;

const TABLE_SUMMARY_MAX: usize = 60;

/// First non-empty content line, or an empty string.
pub fn entry_summary(entry: &Entry) -> String {
    entry
        .content
        .as_deref()
        .and_then(|content| content.lines().map(str::trim).find(|line| !line.is_empty()))
        .unwrap_or("")
        .to_string()
}

/// Title and summary on one line, cut to `max` characters.
pub fn entry_table_summary(entry: &Entry, max: usize) -> String {
    let summary = entry_summary(entry);
    let line = if summary.is_empty() {
        entry.title.clone()
    } else {
        format!("{}: {}", entry.title, summary)
    };
    truncate_chars(&line, max)
}

fn truncate_chars(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let kept: String = value.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Convert an entry to JSON for output, using the on-disk field names.
pub fn entry_json(entry: &Entry) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(entry)?)
}

pub fn entries_json(entries: &[Entry]) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(entries)?)
}

/// Print a single entry in human-readable format.
pub fn print_entry(entry: &Entry, quiet: bool) {
    if !quiet {
        println!("ID: {}", entry.id);
        println!("Title: {}", entry.title);
        println!("Date: {}", entry.date.format("%Y-%m-%d"));
        println!("Created: {}", entry.created_at);
        if entry.updated_at != entry.created_at {
            println!("Updated: {}", entry.updated_at);
        }
        println!();
    }
    if let Some(content) = &entry.content {
        println!("{}", content);
    }
}

/// Print a list of entries as a table or plain lines.
pub fn print_entries(entries: &[Entry], format: OutputFormat, quiet: bool) {
    if entries.is_empty() {
        if !quiet {
            println!("No entries found.");
        }
        return;
    }
    match format {
        OutputFormat::Table => {
            if !quiet {
                println!("ID | DATE | ENTRY");
            }
            for entry in entries {
                println!(
                    "{} | {} | {}",
                    entry.id,
                    entry.date.format("%Y-%m-%d"),
                    entry_table_summary(entry, TABLE_SUMMARY_MAX)
                );
            }
        }
        OutputFormat::Plain => {
            for entry in entries {
                println!(
                    "{} {} {}",
                    entry.id,
                    entry.date.format("%Y-%m-%d"),
                    entry.title
                );
            }
        }
    }
}
