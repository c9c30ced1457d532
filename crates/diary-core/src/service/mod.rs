//! Entry service: validates raw form input and forwards to a store.
//!
//! Validation failures and missing entries come back as values. Store
//! faults on the write path become a generic server-error `FormState`;
//! on the read path they are logged and degrade to empty results.

mod form_state;
mod validation;

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::calendar::entry_days;
use crate::storage::{Entry, EntryPatch, EntryStore, NewEntry};

pub use form_state::{
    DeleteOutcome, FormOutcome, FormState, MSG_CREATED, MSG_CREATE_FAILED, MSG_NOT_FOUND,
    MSG_UPDATED, MSG_UPDATE_FAILED, MSG_VALIDATION_FAILED,
};
pub use validation::{
    parse_date, validate_form, EntryForm, FieldErrors, ValidEntry, CONTENT_MIN_CHARS,
    FIELD_CONTENT, FIELD_DATE, FIELD_TITLE, TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};

/// Orchestrates validation and store calls.
#[derive(Debug, Clone)]
pub struct EntryService<S> {
    store: S,
}

impl<S: EntryStore> EntryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate `form` and create an entry from it.
    pub fn create_entry(&self, form: &EntryForm) -> FormState {
        let valid = match validate_form(form) {
            Ok(valid) => valid,
            Err(errors) => {
                tracing::debug!(?errors, "create rejected by validation");
                return FormState::invalid(errors);
            }
        };

        let new_entry = NewEntry::new(valid.title, valid.date).with_content(valid.content);
        match self.store.create(&new_entry) {
            Ok(entry) => {
                tracing::info!(id = %entry.id, "entry created");
                FormState::saved(MSG_CREATED, entry.id)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to create entry");
                FormState::failure(MSG_CREATE_FAILED)
            }
        }
    }

    /// Validate `form` and replace the title, content, and date of entry `id`.
    pub fn update_entry(&self, id: &str, form: &EntryForm) -> FormState {
        let valid = match validate_form(form) {
            Ok(valid) => valid,
            Err(errors) => {
                tracing::debug!(id, ?errors, "update rejected by validation");
                return FormState::invalid(errors);
            }
        };

        let patch = EntryPatch::new()
            .title(valid.title)
            .content(valid.content)
            .date(valid.date);
        match self.store.update(id, &patch) {
            Ok(Some(entry)) => {
                tracing::info!(id = %entry.id, "entry updated");
                FormState::saved(MSG_UPDATED, entry.id)
            }
            Ok(None) => {
                tracing::debug!(id, "update target not found");
                FormState::not_found()
            }
            Err(err) => {
                tracing::error!(id, error = %err, "failed to update entry");
                FormState::failure(MSG_UPDATE_FAILED)
            }
        }
    }

    pub fn delete_entry(&self, id: &str) -> DeleteOutcome {
        if id.trim().is_empty() {
            tracing::error!("no entry id given for deletion");
            return DeleteOutcome::MissingId;
        }

        match self.store.delete(id) {
            Ok(true) => {
                tracing::info!(id, "entry deleted");
                DeleteOutcome::Deleted
            }
            Ok(false) => {
                tracing::warn!(id, "entry not found for deletion");
                DeleteOutcome::NotFound
            }
            Err(err) => {
                tracing::error!(id, error = %err, "failed to delete entry");
                DeleteOutcome::Failed
            }
        }
    }

    /// All entries, newest date first. Store faults yield an empty list.
    pub fn all_entries(&self) -> Vec<Entry> {
        self.store.list_all().unwrap_or_else(|err| {
            tracing::error!(error = %err, "failed to list entries");
            Vec::new()
        })
    }

    pub fn entry_by_id(&self, id: &str) -> Option<Entry> {
        self.store.get_by_id(id).unwrap_or_else(|err| {
            tracing::error!(id, error = %err, "failed to fetch entry");
            None
        })
    }

    pub fn entries_by_date(&self, day: NaiveDate) -> Vec<Entry> {
        self.store.list_by_date(day).unwrap_or_else(|err| {
            tracing::error!(%day, error = %err, "failed to list entries by date");
            Vec::new()
        })
    }

    /// Days that have at least one entry, for date-picker highlighting.
    pub fn entry_days(&self) -> BTreeSet<NaiveDate> {
        entry_days(&self.all_entries())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DiaryError, Result};
    use chrono::{TimeZone, Utc};

    /// Store whose reads see one entry and whose writes always fail.
    struct ReadOnlyStore {
        entry: Entry,
    }

    impl ReadOnlyStore {
        fn new() -> Self {
            let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
            Self {
                entry: Entry {
                    id: "entry-1-fixed0000".to_string(),
                    title: "Fixed".to_string(),
                    content: Some("Fixed content".to_string()),
                    date: at,
                    created_at: at,
                    updated_at: at,
                },
            }
        }

        fn disk_full() -> DiaryError {
            DiaryError::Storage("disk full".to_string())
        }
    }

    impl EntryStore for ReadOnlyStore {
        fn list_all(&self) -> Result<Vec<Entry>> {
            Ok(vec![self.entry.clone()])
        }

        fn get_by_id(&self, id: &str) -> Result<Option<Entry>> {
            Ok((id == self.entry.id).then(|| self.entry.clone()))
        }

        fn list_by_date(&self, _day: NaiveDate) -> Result<Vec<Entry>> {
            Err(DiaryError::Storage("unreadable".to_string()))
        }

        fn create(&self, _entry: &NewEntry) -> Result<Entry> {
            Err(Self::disk_full())
        }

        fn update(&self, _id: &str, _patch: &EntryPatch) -> Result<Option<Entry>> {
            Err(Self::disk_full())
        }

        fn delete(&self, _id: &str) -> Result<bool> {
            Err(Self::disk_full())
        }
    }

    fn valid_form() -> EntryForm {
        EntryForm::new()
            .title("Morning walk")
            .content("Saw the river freeze over.")
            .date("2024-03-01")
    }

    #[test]
    fn test_create_store_failure_is_generic_server_error() {
        let service = EntryService::new(ReadOnlyStore::new());
        let state = service.create_entry(&valid_form());

        assert_eq!(state, FormState::failure(MSG_CREATE_FAILED));
        assert!(state.errors.is_none());
    }

    #[test]
    fn test_update_store_failure_is_generic_server_error() {
        let service = EntryService::new(ReadOnlyStore::new());
        let state = service.update_entry("entry-1-fixed0000", &valid_form());

        assert_eq!(state, FormState::failure(MSG_UPDATE_FAILED));
    }

    #[test]
    fn test_validation_runs_before_store() {
        let service = EntryService::new(ReadOnlyStore::new());
        let state = service.create_entry(&valid_form().title("ab"));

        assert!(!state.success);
        assert_eq!(state.message, MSG_VALIDATION_FAILED);
        assert!(state.errors.unwrap().get(FIELD_TITLE).is_some());
    }

    #[test]
    fn test_delete_outcomes() {
        let service = EntryService::new(ReadOnlyStore::new());
        assert_eq!(service.delete_entry("  "), DeleteOutcome::MissingId);
        assert_eq!(service.delete_entry("entry-1-fixed0000"), DeleteOutcome::Failed);
    }

    #[test]
    fn test_read_failures_degrade_to_empty() {
        let service = EntryService::new(ReadOnlyStore::new());
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        assert!(service.entries_by_date(day).is_empty());
        assert_eq!(service.all_entries().len(), 1);
        assert!(service.entry_by_id("entry-1-fixed0000").is_some());
        assert!(service.entry_by_id("nope").is_none());
    }

    #[test]
    fn test_entry_days_from_store() {
        let service = EntryService::new(ReadOnlyStore::new());
        let days = service.entry_days();
        assert_eq!(days.len(), 1);
        assert!(days.contains(&NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
    }
}
