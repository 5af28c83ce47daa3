//! Core error types for ecohelper-core.
//!
//! Submissions have exactly one failure class, [`ValidationError`], which is
//! always recoverable. Configuration I/O gets its own [`ConfigError`], and
//! [`CoreError`] wraps both; [`Config::load`](crate::Config::load) and
//! [`Config::save`](crate::Config::save) return it.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ecohelper-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Rejected activity submission
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Reasons an activity submission is turned away before it reaches the store.
///
/// The `Display` text is the notice shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Category, activity type or amount left blank
    #[error("Please fill in all fields")]
    MissingField,

    /// Amount is not a finite number greater than zero
    #[error("Please enter a valid duration (got '{input}')")]
    InvalidDuration { input: String },

    /// Category is neither water nor energy
    #[error("Unknown category '{input}': expected 'water' or 'energy'")]
    UnknownCategory { input: String },
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

    /// Key does not exist in the configuration
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Home directory could not be resolved
    #[error("Could not determine home directory")]
    NoHomeDir,
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
