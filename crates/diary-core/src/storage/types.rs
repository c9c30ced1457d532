//! Core data types for the storage layer.
//!
//! These types mirror the persisted JSON document one to one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// The whole persisted document: `{ "entries": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiaryData {
    /// Entries in insertion order
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// A diary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Opaque identifier assigned by the store
    pub id: String,

    /// User-facing title
    pub title: String,

    /// Markdown body (null in files written without one)
    pub content: Option<String>,

    /// The day this entry is about, stored as a full timestamp
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date: DateTime<Utc>,

    /// When this entry was created
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,

    /// When this entry was last changed
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied by the caller when creating an entry.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub title: String,
    pub content: Option<String>,
    pub date: DateTime<Utc>,
}

impl NewEntry {
    pub fn new(title: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            content: None,
            date,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// Partial update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl EntryPatch {
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

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Merge the provided fields onto `entry`. Does not touch timestamps.
    pub fn apply_to(&self, entry: &mut Entry) {
        if let Some(title) = &self.title {
            entry.title = title.clone();
        }
        if let Some(content) = &self.content {
            entry.content = Some(content.clone());
        }
        if let Some(date) = self.date {
            entry.date = date;
        }
    }
}
