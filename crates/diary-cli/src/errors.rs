//! CLI error types for structured error handling.
//!
//! These map domain outcomes that are not faults (not found, rejected
//! input) to specific exit codes.

use std::fmt;

use diary_core::service::FieldErrors;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Entry not found
    NotFound { message: String, hint: String },

    /// Form validation failed
    Validation {
        message: String,
        errors: FieldErrors,
    },

    /// Invalid user input outside form validation
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::Validation { message, errors } => {
                write!(f, "{}", message)?;
                for (field, messages) in errors.iter() {
                    for text in messages {
                        write!(f, "\n  {}: {}", field, text)?;
                    }
                }
                Ok(())
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn validation(message: impl Into<String>, errors: FieldErrors) -> Self {
        CliError::Validation {
            message: message.into(),
            errors,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::Validation { .. } | CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_lists_fields() {
        let mut errors = FieldErrors::new();
        errors.add("content", "Content must be at least 10 characters.");
        errors.add("title", "Title must be at least 3 characters.");
        let err = CliError::validation("Validation failed.", errors);

        assert_eq!(
            err.to_string(),
            "Validation failed.\n  content: Content must be at least 10 characters.\n  title: Title must be at least 3 characters."
        );
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_not_found_exit_code() {
        let err = CliError::not_found("Entry not found", "Hint: run `diary list`");
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
        assert!(err.to_string().contains("Hint"));
    }
}
