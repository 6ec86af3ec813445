//! Error types for pagebuddy
//!
//! Covers the fallible edges of the crate: configuration, the settings
//! store, dataset loading and the serialization/I/O beneath them. Paging
//! math itself never fails; out-of-range input is clamped or ignored.

use thiserror::Error;

/// Main error type for pagebuddy operations
#[derive(Error, Debug)]
pub enum PagerError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Settings store errors
    #[error("Settings store error: {0}")]
    StoreError(String),

    /// Store keys must survive being used as file names
    #[error("Invalid store key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    /// Dataset loading errors
    #[error("Dataset error: {0}")]
    DatasetError(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for pagebuddy operations
pub type Result<T> = std::result::Result<T, PagerError>;
