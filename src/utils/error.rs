//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Descriptor parsing itself never errors: malformed records are dropped and
//! the caller checks `ResourceDiscovery::is_valid`.

use thiserror::Error;

/// Errors that can occur while loading descriptor text
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read descriptor: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Environment variable {0} is not set")]
    MissingEnv(String),

    #[error("Descriptor is empty")]
    Empty,
}

/// Errors that can occur while parsing a target node list
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TargetError {
    #[error("Target node list is empty")]
    Empty,

    #[error("Invalid target entry: {0}")]
    InvalidEntry(String),

    #[error("Duplicate target id: {0}")]
    DuplicateId(u32),
}

/// Errors that can occur during output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Invalid variable name: {0:?}")]
    InvalidVarName(String),
}
