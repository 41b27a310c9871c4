//! Core error types for rhythmflow-core.
//!
//! This module defines the error hierarchy using thiserror. Missing blocks,
//! malformed input, snapshot storage and configuration failures each get
//! their own type so callers can tell recoverable conditions apart.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for rhythmflow-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Update/toggle referenced an id that is not in the schedule
    #[error("Block not found: {id}")]
    NotFound { id: String },

    /// Input violated the block input contract
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Snapshot persistence errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`].
    pub fn not_found(id: impl Into<String>) -> Self {
        CoreError::NotFound { id: id.into() }
    }
}

/// Validation errors for block input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Time string is not an "HH:MM" label usable for this field
    #[error("Invalid {field} '{value}': expected an HH:MM label on the 30-minute grid")]
    InvalidTime { field: &'static str, value: String },

    /// Title is empty or whitespace
    #[error("Title must not be empty")]
    EmptyTitle,

    /// Category outside the closed set
    #[error("Unknown activity category: {0}")]
    UnknownCategory(String),

    /// Energy level outside the closed set
    #[error("Unknown energy level: {0}")]
    UnknownEnergy(String),

    /// A block with this id is already scheduled
    #[error("Duplicate block id: {0}")]
    DuplicateId(String),

    /// Stored points disagree with the block's own score
    #[error("Block {id} carries {points} points but scores {expected}")]
    PointsMismatch { id: String, points: u32, expected: u32 },

    /// Day total no longer fits in a u32
    #[error("Total points would overflow")]
    PointsOverflow,
}

/// Snapshot storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read the snapshot
    #[error("Failed to read snapshot from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the snapshot
    #[error("Failed to write snapshot to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot exists but is not a valid schedule
    #[error("Failed to decode snapshot: {0}")]
    Decode(#[source] serde_json::Error),

    /// Schedule could not be encoded
    #[error("Failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    /// Backend refused the write (e.g. quota exceeded)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Configuration-specific errors.
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

    /// No usable data directory
    #[error("Cannot determine data directory: {0}")]
    DataDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
