//! Core error types for tabgroup-core.
//!
//! The grouping pass itself is infallible by construction; these errors come
//! from the edges: loading configuration, building rule tables and validating
//! settings before a pass starts.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tabgroup-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule table errors
    #[error("Rules error: {0}")]
    Rules(#[from] RulesError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML decoding errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
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

    /// Home directory could not be resolved
    #[error("Could not determine configuration directory")]
    NoConfigDir,
}

/// Errors raised while assembling a [`crate::RuleSet`].
#[derive(Error, Debug, PartialEq)]
pub enum RulesError {
    /// Category label is blank
    #[error("Rule in {table} table has an empty label")]
    EmptyLabel { table: &'static str },

    /// Category has nothing to match on
    #[error("Rule '{label}' in {table} table has no patterns")]
    EmptyPatterns { table: &'static str, label: String },

    /// Same label declared twice in one table
    #[error("Rule '{label}' declared twice in {table} table")]
    DuplicateLabel { table: &'static str, label: String },
}

/// Validation errors.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// Confidence threshold out of range
    #[error("Confidence threshold must be in [0, 100], got {0}")]
    ThresholdOutOfRange(u32),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
