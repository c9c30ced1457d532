//! Input and parsing helper functions for the CLI.

use std::io::{self, IsTerminal, Read};

use chrono::{Datelike, NaiveDate, Utc};

/// Marker value for `--content` that reads the content from stdin.
pub const STDIN_MARKER: &str = "-";

/// Read entry content from --content, --content-file, or stdin.
///
/// `--content -` always reads stdin. Otherwise piped stdin is only consulted
/// when `piped_stdin` is set (`add` sets it, `edit` does not).
/// Returns `None` when nothing was supplied, leaving the decision to the
/// caller (validation for `add`, keep-current for `edit`).
pub fn read_entry_content(
    content: Option<String>,
    content_file: Option<&str>,
    piped_stdin: bool,
) -> anyhow::Result<Option<String>> {
    if let Some(value) = content {
        if value == STDIN_MARKER {
            return Ok(Some(read_stdin()?));
        }
        return Ok(Some(value));
    }

    if let Some(path) = content_file {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read content file {}: {}", path, e))?;
        return Ok(Some(contents.trim_end().to_string()));
    }

    if piped_stdin && !io::stdin().is_terminal() {
        let buffer = read_stdin()?;
        if !buffer.is_empty() {
            return Ok(Some(buffer));
        }
    }

    Ok(None)
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(buffer.trim_end().to_string())
}

/// Parse a calendar day (YYYY-MM-DD).
pub fn parse_day(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid day (expected YYYY-MM-DD): {}", value))
}

/// Parse a month (YYYY-MM) into (year, month).
pub fn parse_month(value: &str) -> anyhow::Result<(i32, u32)> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid month (expected YYYY-MM): {}", value))?;
    Ok((first.year(), first.month()))
}

/// Today's date as a form value, the default for new entries.
pub fn today_value() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Output format for list commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Parse output format string.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(anyhow::anyhow!(
            "Unsupported format: {} (use table or plain)",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day() {
        assert_eq!(
            parse_day("2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert!(parse_day("2024-13-01").is_err());
        assert!(parse_day("March 1").is_err());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-02").unwrap(), (2024, 2));
        assert!(parse_month("2024-00").is_err());
        assert!(parse_month("2024").is_err());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(None).unwrap(), None);
        assert_eq!(
            parse_output_format(Some("plain")).unwrap(),
            Some(OutputFormat::Plain)
        );
        assert!(parse_output_format(Some("csv")).is_err());
    }

    #[test]
    fn test_content_flag_wins() {
        let content = read_entry_content(Some("from flag".to_string()), Some("/nonexistent"), true)
            .unwrap();
        assert_eq!(content.as_deref(), Some("from flag"));
    }

    #[test]
    fn test_content_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entry.md");
        std::fs::write(&path, "# Heading\n\nBody text\n\n").unwrap();

        let content = read_entry_content(None, path.to_str(), false).unwrap();
        assert_eq!(content.as_deref(), Some("# Heading\n\nBody text"));
    }

    #[test]
    fn test_missing_content_file_errors() {
        assert!(read_entry_content(None, Some("/definitely/not/here.md"), true).is_err());
    }

    #[test]
    fn test_today_value_parses() {
        assert!(parse_day(&today_value()).is_ok());
    }
}
