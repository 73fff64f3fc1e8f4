//! Core error types for hackdeck-core.
//!
//! The page itself has no fatal states: asset failures fall back to static
//! visuals and flag persistence is best-effort. The errors here cover the
//! setup surface instead -- opening the state store, loading configuration,
//! and the internal classification of a failed asset fetch.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for hackdeck-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// State-store errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Decorative asset errors (internal; callers see the fallback visual)
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// State-store errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the store file
    #[error("Failed to open state store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// The store is locked by another process
    #[error("State store is locked")]
    Locked,

    /// Backing storage cannot be reached at all
    #[error("State store unavailable: {0}")]
    Unavailable(String),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Decorative asset fetch errors. Never surfaced to the page; the fetch
/// layer maps every variant to the static fallback visual.
#[derive(Error, Debug)]
pub enum AssetError {
    /// Request could not be sent or the connection dropped
    #[error("Asset request failed: {0}")]
    Request(String),

    /// Server answered with a non-success status
    #[error("Asset request returned status {0}")]
    Status(u16),

    /// Body was not the expected JSON payload
    #[error("Asset payload malformed: {0}")]
    Malformed(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    StorageError::Locked
                } else {
                    StorageError::QueryFailed(err.to_string())
                }
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
