//! Error types for dnsprefs.
//!
//! The reconciler itself never fails; errors only come from loading
//! configuration and from the persisted settings store.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for dnsprefs operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("settings store error: {0}")]
    Store(#[from] StoreError),
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for configuration values.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("settings_path cannot be empty")]
    EmptySettingsPath,
}

/// Errors raised while reading or writing persisted DNS settings.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read settings from {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write settings to {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[source] toml::ser::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;
