//! Form validation for entry create/update.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{DiaryError, Result};
use crate::storage::parse_timestamp;

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 100;
/// Minimum content length for both create and update.
pub const CONTENT_MIN_CHARS: usize = 10;

pub const FIELD_TITLE: &str = "title";
pub const FIELD_CONTENT: &str = "content";
pub const FIELD_DATE: &str = "date";

/// Raw, untyped form input. Any field may be missing.
#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    pub title: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// Form input that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidEntry {
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
}

/// Per-field lists of human-readable messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }
}

/// Validate every field, collecting all failures.
pub fn validate_form(form: &EntryForm) -> std::result::Result<ValidEntry, FieldErrors> {
    let mut errors = FieldErrors::new();

    match form.title.as_deref() {
        None => errors.add(FIELD_TITLE, "Title is required."),
        Some(title) => {
            let len = title.trim().chars().count();
            if len < TITLE_MIN_CHARS {
                errors.add(
                    FIELD_TITLE,
                    format!("Title must be at least {} characters.", TITLE_MIN_CHARS),
                );
            } else if len > TITLE_MAX_CHARS {
                errors.add(
                    FIELD_TITLE,
                    format!("Title must be at most {} characters.", TITLE_MAX_CHARS),
                );
            }
        }
    }

    match form.content.as_deref() {
        None => errors.add(FIELD_CONTENT, "Content is required."),
        Some(content) if content.chars().count() < CONTENT_MIN_CHARS => errors.add(
            FIELD_CONTENT,
            format!("Content must be at least {} characters.", CONTENT_MIN_CHARS),
        ),
        Some(_) => {}
    }

    let date = match form.date.as_deref().map(str::trim) {
        None | Some("") => {
            errors.add(FIELD_DATE, "Please select a date.");
            None
        }
        Some(raw) => match parse_date(raw) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.add(FIELD_DATE, "Invalid date.");
                None
            }
        },
    };

    match (form.title.as_ref(), form.content.as_ref(), date) {
        (Some(title), Some(content), Some(date)) if errors.is_empty() => Ok(ValidEntry {
            title: title.clone(),
            content: content.clone(),
            date,
        }),
        _ => Err(errors),
    }
}

/// Parse a submitted date: RFC 3339, a naive ISO-8601 date-time (UTC), or a
/// bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    parse_timestamp(value).ok_or_else(|| {
        DiaryError::InvalidInput(format!(
            "Invalid date (expected ISO-8601 or YYYY-MM-DD): {}",
            value
        ))
    })
}
