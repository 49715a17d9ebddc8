use thiserror::Error;

/// Error type for securedb operations
#[derive(Debug, Error)]
pub enum SecureDbError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Statement preparation failed: {0}")]
    PrepareFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),
}

/// Result type alias for securedb operations
pub type Result<T> = std::result::Result<T, SecureDbError>;
