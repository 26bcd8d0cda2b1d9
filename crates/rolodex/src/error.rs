//! Error types for rolodex.
//!
//! This module defines all error types used throughout the rolodex crate.
//! Storage failures are never retried anywhere in the crate; they surface
//! synchronously to the caller of the operation that triggered them.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for rolodex operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// Failed to open or create the backing database.
    #[error("failed to open storage at {path}: {source}")]
    StorageOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A storage read or write failed.
    #[error("storage operation failed: {0}")]
    StorageQuery(#[from] rusqlite::Error),

    /// Failed to bring the storage schema up to date.
    #[error("storage migration failed: {message}")]
    StorageMigration {
        /// Description of what went wrong.
        message: String,
    },

    /// Failed to create a directory on the way to the database file.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Serialization Errors ===
    /// The contact snapshot could not be encoded or decoded.
    #[error("snapshot serialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),

    // === I/O Errors ===
    /// Terminal or file system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for rolodex operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a storage migration error.
    #[must_use]
    pub fn migration(message: impl Into<String>) -> Self {
        Self::StorageMigration {
            message: message.into(),
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error came from the storage layer.
    #[must_use]
    pub fn is_storage_error(&self) -> bool {
        matches!(
            self,
            Self::StorageOpen { .. } | Self::StorageQuery(_) | Self::StorageMigration { .. }
        )
    }
}
