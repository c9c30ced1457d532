//! JSON file storage backend.
//!
//! Every operation re-reads the whole file, and every mutation rewrites it.
//! Nothing is cached between calls and nothing is locked, so two processes
//! mutating the same file can lose each other's writes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};

use crate::calendar::calendar_day;
use crate::error::{DiaryError, Result};
use crate::fs::write_with_parent_dirs;
use crate::storage::id::generate_id;
use crate::storage::traits::EntryStore;
use crate::storage::types::{DiaryData, Entry, EntryPatch, NewEntry};

/// Store location used when nothing else is configured, relative to the
/// working directory.
pub const DEFAULT_STORE_PATH: &str = "data/diary-entries.json";

/// Configuration injected into a `JsonFileStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path of the JSON document
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

/// Entry store backed by a single JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    config: StoreConfig,
}

impl JsonFileStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Read the whole document.
    ///
    /// A missing, unreadable, or malformed file is reported through the log
    /// and replaced by an empty document.
    pub fn read_document(&self) -> DiaryData {
        match self.try_read_document() {
            Ok(data) => data,
            Err(ReadFailure::Missing) => {
                tracing::debug!(path = %self.path().display(), "store file missing, using empty store");
                DiaryData::default()
            }
            Err(ReadFailure::Io(err)) => {
                tracing::warn!(path = %self.path().display(), error = %err, "failed to read store file, using empty store");
                DiaryData::default()
            }
            Err(ReadFailure::Malformed(err)) => {
                tracing::warn!(path = %self.path().display(), error = %err, "store file is not valid JSON, using empty store");
                DiaryData::default()
            }
        }
    }

    /// Write the whole document as pretty-printed JSON.
    ///
    /// The file is overwritten in place rather than swapped in atomically.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::Storage` if the directory or file cannot be written.
    pub fn write_document(&self, data: &DiaryData) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        write_with_parent_dirs(self.path(), serialized.as_bytes()).map_err(|err| {
            tracing::error!(path = %self.path().display(), error = %err, "failed to write store file");
            DiaryError::Storage(format!(
                "Failed to write {}: {}",
                self.path().display(),
                err
            ))
        })
    }

    fn try_read_document(&self) -> std::result::Result<DiaryData, ReadFailure> {
        let contents = fs::read_to_string(self.path()).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                ReadFailure::Missing
            } else {
                ReadFailure::Io(err)
            }
        })?;
        serde_json::from_str(&contents).map_err(ReadFailure::Malformed)
    }
}

enum ReadFailure {
    Missing,
    Io(io::Error),
    Malformed(serde_json::Error),
}

impl EntryStore for JsonFileStore {
    fn list_all(&self) -> Result<Vec<Entry>> {
        let mut entries = self.read_document().entries;
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    fn get_by_id(&self, id: &str) -> Result<Option<Entry>> {
        Ok(self
            .read_document()
            .entries
            .into_iter()
            .find(|entry| entry.id == id))
    }

    fn list_by_date(&self, day: NaiveDate) -> Result<Vec<Entry>> {
        let mut entries: Vec<Entry> = self
            .read_document()
            .entries
            .into_iter()
            .filter(|entry| calendar_day(&entry.date) == day)
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    fn create(&self, new_entry: &NewEntry) -> Result<Entry> {
        let mut data = self.read_document();
        let now = Utc::now();

        let entry = Entry {
            id: generate_id(now),
            title: new_entry.title.clone(),
            content: new_entry.content.clone(),
            date: new_entry.date,
            created_at: now,
            updated_at: now,
        };

        data.entries.push(entry.clone());
        self.write_document(&data)?;

        tracing::debug!(id = %entry.id, "created entry");
        Ok(entry)
    }

    fn update(&self, id: &str, patch: &EntryPatch) -> Result<Option<Entry>> {
        let mut data = self.read_document();
        let Some(entry) = data.entries.iter_mut().find(|entry| entry.id == id) else {
            return Ok(None);
        };

        patch.apply_to(entry);
        // Never move backwards, even if the wall clock does.
        entry.updated_at = Utc::now().max(entry.updated_at);
        let updated = entry.clone();

        self.write_document(&data)?;

        tracing::debug!(id = %updated.id, "updated entry");
        Ok(Some(updated))
    }

    fn delete(&self, id: &str) -> Result<bool> {
        let mut data = self.read_document();
        let Some(index) = data.entries.iter().position(|entry| entry.id == id) else {
            return Ok(false);
        };

        data.entries.remove(index);
        self.write_document(&data)?;

        tracing::debug!(id, "deleted entry");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone};
    use tempfile::tempdir;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_default_config_path() {
        assert_eq!(
            StoreConfig::default().path,
            PathBuf::from("data/diary-entries.json")
        );
    }

    #[test]
    fn test_create_writes_file_lazily() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("diary-entries.json");
        let store = JsonFileStore::new(StoreConfig::new(&path));

        assert!(!path.exists());
        store
            .create(&NewEntry::new("Hello", at(2024, 3, 1, 0)).with_content("Some content."))
            .unwrap();
        assert!(path.exists());

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("{\n  \"entries\": ["));
    }

    #[test]
    fn test_update_missing_does_not_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = JsonFileStore::new(StoreConfig::new(&path));

        let result = store
            .update("entry-0-missing", &EntryPatch::new().title("New"))
            .unwrap();

        assert!(result.is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_list_by_date_orders_by_created_at() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(StoreConfig::new(dir.path().join("s.json")));
        let first = store
            .create(&NewEntry::new("First", at(2024, 3, 1, 9)))
            .unwrap();
        let second = store
            .create(&NewEntry::new("Second", at(2024, 3, 1, 8)))
            .unwrap();

        let mut data = store.read_document();
        // Force distinct creation times regardless of clock resolution.
        data.entries[0].created_at = at(2024, 3, 1, 10);
        data.entries[1].created_at = at(2024, 3, 1, 11);
        store.write_document(&data).unwrap();

        let ids: Vec<String> = store
            .list_by_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
            .unwrap()
            .into_iter()
            .map(|entry| entry.id)
            .collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn test_write_failure_is_storage_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"not a directory").unwrap();
        let store = JsonFileStore::new(StoreConfig::new(blocker.join("store.json")));

        let err = store
            .create(&NewEntry::new("Title", at(2024, 1, 1, 0)))
            .unwrap_err();
        assert!(matches!(err, DiaryError::Storage(_)));
    }
}
