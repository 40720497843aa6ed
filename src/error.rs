//! Custom error types for taskpad.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for taskpad operations
#[derive(Error, Debug)]
pub enum TaskError {
    /// Store operation failed
    #[error("Store error: {message}")]
    Store {
        message: String,
        path: Option<PathBuf>,
    },

    /// Remove index outside the 1-based task range
    #[error("Invalid task number {index}: list has {len} task(s)")]
    InvalidIndex { index: i64, len: usize },

    /// IO error wrapper
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON error wrapper
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl TaskError {
    /// Create a store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
            path: None,
        }
    }

    /// Create a store error with the offending path
    pub fn store_with_path(message: impl Into<String>, path: PathBuf) -> Self {
        Self::Store {
            message: message.into(),
            path: Some(path),
        }
    }

    /// Check if this error is a user mistake rather than a fault.
    ///
    /// User errors are reported as warnings and the process still exits 0.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidIndex { .. })
    }
}

/// Type alias for taskpad results
pub type Result<T> = std::result::Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TaskError::InvalidIndex { index: 4, len: 2 };
        assert!(err.to_string().contains('4'));
        assert!(err.to_string().contains('2'));
    }

    #[test]
    fn test_is_user_error() {
        assert!(TaskError::InvalidIndex { index: 0, len: 0 }.is_user_error());
        assert!(!TaskError::store("disk on fire").is_user_error());
    }

    #[test]
    fn test_store_with_path() {
        let path = PathBuf::from("/test/tasks.json");
        let err = TaskError::store_with_path("failed to write", path.clone());
        if let TaskError::Store {
            message,
            path: opt_path,
        } = err
        {
            assert_eq!(message, "failed to write");
            assert_eq!(opt_path, Some(path));
        } else {
            panic!("Wrong error variant");
        }
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: TaskError = io_err.into();
        assert!(matches!(err, TaskError::Io(_)));
        assert!(err.to_string().contains("access denied"));
    }
}
