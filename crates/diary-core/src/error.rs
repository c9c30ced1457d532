//! Error types for Diary core operations.
//!
//! Only faults live here. Validation failures and missing entries are
//! ordinary return values (`FormState`, `Option`, `bool`) and never
//! surface as a `DiaryError`.

use thiserror::Error;

/// Result type alias for Diary operations.
pub type Result<T> = std::result::Result<T, DiaryError>;

/// Core error type for Diary operations.
#[derive(Debug, Error)]
pub enum DiaryError {
    /// Storage backend error (write failures, directory creation)
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON encoding or decoding error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for DiaryError {
    fn from(err: std::io::Error) -> Self {
        DiaryError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for DiaryError {
    fn from(err: serde_json::Error) -> Self {
        DiaryError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DiaryError = io.into();
        assert!(matches!(err, DiaryError::Storage(_)));
        assert!(err.to_string().starts_with("Storage error:"));
    }

    #[test]
    fn test_json_error_maps_to_serialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DiaryError = json_err.into();
        assert!(matches!(err, DiaryError::Serialization(_)));
    }
}
