//! Result values handed back to front ends.

use serde::Serialize;

use super::validation::FieldErrors;

pub const MSG_VALIDATION_FAILED: &str = "Validation failed. Please fix the errors.";
pub const MSG_CREATED: &str = "Entry created successfully!";
pub const MSG_UPDATED: &str = "Entry updated successfully!";
pub const MSG_NOT_FOUND: &str = "Entry not found.";
pub const MSG_CREATE_FAILED: &str = "Server error while creating the entry.";
pub const MSG_UPDATE_FAILED: &str = "Server error while updating the entry.";

/// What happened to a create or update submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Saved,
    Invalid,
    NotFound,
    /// The store could not be written
    Failed,
}

/// Outcome of a create or update submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    #[serde(skip)]
    pub outcome: FormOutcome,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl FormState {
    pub fn invalid(errors: FieldErrors) -> Self {
        Self {
            outcome: FormOutcome::Invalid,
            message: MSG_VALIDATION_FAILED.to_string(),
            errors: Some(errors),
            success: false,
            id: None,
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            outcome: FormOutcome::Failed,
            message: message.to_string(),
            errors: None,
            success: false,
            id: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            outcome: FormOutcome::NotFound,
            message: MSG_NOT_FOUND.to_string(),
            errors: None,
            success: false,
            id: None,
        }
    }

    pub fn saved(message: &str, id: impl Into<String>) -> Self {
        Self {
            outcome: FormOutcome::Saved,
            message: message.to_string(),
            errors: None,
            success: true,
            id: Some(id.into()),
        }
    }

    pub fn is_validation_failure(&self) -> bool {
        self.outcome == FormOutcome::Invalid
    }

    pub fn is_not_found(&self) -> bool {
        self.outcome == FormOutcome::NotFound
    }
}

/// Outcome of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    /// The request carried no id
    MissingId,
    /// The store could not be written
    Failed,
}

impl DeleteOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, DeleteOutcome::Deleted)
    }
}
