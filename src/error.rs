//! Error types for the free board.

use thiserror::Error;

/// Common error type for the free board.
#[derive(Error, Debug)]
pub enum FreeboardError {
    /// Database error.
    ///
    /// Errors from sqlx are converted into this variant.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication error (token could not be decoded).
    #[error("authentication error: {0}")]
    Auth(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested entity does not exist.
    ///
    /// Carries the user-facing message, e.g. "해당 댓글이 존재하지 않습니다.".
    #[error("{0}")]
    NotFound(String),

    /// Unique key already taken, e.g. a username.
    ///
    /// Carries the user-facing message.
    #[error("{0}")]
    Duplicate(String),

    /// Internal failure unrelated to user input (hashing, token signing).
    #[error("internal error: {0}")]
    Internal(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for FreeboardError {
    fn from(e: sqlx::Error) -> Self {
        FreeboardError::Database(e.to_string())
    }
}

/// Result type alias for free board operations.
pub type Result<T> = std::result::Result<T, FreeboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        let err = FreeboardError::Auth("bad signature".to_string());
        assert_eq!(err.to_string(), "authentication error: bad signature");
    }

    #[test]
    fn test_validation_error_display() {
        let err = FreeboardError::Validation("contents is empty".to_string());
        assert_eq!(err.to_string(), "validation error: contents is empty");
    }

    #[test]
    fn test_not_found_keeps_message() {
        let err = FreeboardError::NotFound("해당 댓글이 존재하지 않습니다.".to_string());
        assert_eq!(err.to_string(), "해당 댓글이 존재하지 않습니다.");
    }

    #[test]
    fn test_internal_error_display() {
        let err = FreeboardError::Internal("hash failed".to_string());
        assert_eq!(err.to_string(), "internal error: hash failed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FreeboardError = io_err.into();
        assert!(matches!(err, FreeboardError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_sqlx_error_conversion() {
        let err: FreeboardError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, FreeboardError::Database(_)));
    }
}
