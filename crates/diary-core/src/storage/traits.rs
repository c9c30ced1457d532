//! Entry store trait definition.
//!
//! The `EntryStore` trait is the seam between the entry service and a
//! persistence backend. The only backend today is `JsonFileStore`.

use chrono::NaiveDate;

use super::types::{Entry, EntryPatch, NewEntry};
use crate::error::Result;

/// Storage interface for diary entries.
///
/// Implementations own id assignment and the `created_at`/`updated_at`
/// timestamps. Missing entries are reported as `None`/`false`, never as
/// errors.
pub trait EntryStore: Send + Sync {
    /// List every entry, newest `date` first.
    fn list_all(&self) -> Result<Vec<Entry>>;

    /// Get an entry by ID.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(entry))` if found, `Ok(None)` if not found.
    fn get_by_id(&self, id: &str) -> Result<Option<Entry>>;

    /// List entries whose `date` falls on `day`, newest `created_at` first.
    fn list_by_date(&self, day: NaiveDate) -> Result<Vec<Entry>>;

    /// Insert a new entry.
    ///
    /// # Returns
    ///
    /// Returns the stored record with its assigned id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::Storage` if the backing file cannot be written.
    fn create(&self, entry: &NewEntry) -> Result<Entry>;

    /// Merge `patch` onto an existing entry and refresh `updated_at`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` if no entry has this id.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::Storage` if the backing file cannot be written.
    fn update(&self, id: &str, patch: &EntryPatch) -> Result<Option<Entry>>;

    /// Delete an entry.
    ///
    /// # Returns
    ///
    /// Returns `Ok(true)` if an entry was removed, `Ok(false)` if none matched.
    fn delete(&self, id: &str) -> Result<bool>;
}
