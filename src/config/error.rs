//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// A single problem found while validating a configuration
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("History limit must be at least 1")]
    ZeroHistoryLimit,

    #[error("Grouping and decimal separators are both {0:?}")]
    SameSeparators(char),

    #[error("Storage key must not be empty")]
    EmptyStorageKey,
}

/// Errors that can occur loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for this schema
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config parsed but failed validation; every violation is listed
    #[error("Invalid configuration: {}", describe(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
