//! Error types for the kheti library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type shared by the plan engine, storage and the farmbook facade.
#[derive(Error, Debug)]
pub enum KhetiError {
    /// Malformed or out-of-range request fields
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A static table lacks an entry the code expects to exist
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Crop entry not found for the given ID
    #[error("Crop entry with ID {id} not found")]
    EntryNotFound { id: u64 },
    /// Ledger transaction not found for the given ID
    #[error("Transaction with ID {id} not found")]
    TransactionNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> KhetiError {
        KhetiError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> KhetiError {
        KhetiError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl KhetiError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error was caused by the caller's input rather than by
    /// storage or configuration.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| KhetiError::database(message).with_source(e))
    }
}

/// Result type alias for kheti operations
pub type Result<T> = std::result::Result<T, KhetiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = KhetiError::invalid_input("crop").with_reason("must not be empty");
        assert!(err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'crop': must not be empty"
        );
    }

    #[test]
    fn test_db_context_wraps_source() {
        let res: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = res.db_context("Failed to query entry").unwrap_err();
        assert!(matches!(err, KhetiError::Database { .. }));
        assert!(!err.is_invalid_input());
        assert_eq!(err.to_string(), "Database error: Failed to query entry");
    }
}
