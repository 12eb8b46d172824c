//! Error types for schema file loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a schema file.
#[derive(Debug, Error)]
pub enum SchemaFileError {
    /// Schema file not found.
    #[error("schema file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the schema file.
    #[error("failed to read schema file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the schema file as JSON.
    #[error("failed to parse JSON schema {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to parse the schema file as YAML.
    #[error("failed to parse YAML schema {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Extension is neither `.json` nor `.yml`/`.yaml`.
    #[error("unsupported schema format: {path} (expected .json, .yml or .yaml)")]
    UnsupportedFormat { path: PathBuf },
}

/// Result type for schema loading operations.
pub type Result<T> = std::result::Result<T, SchemaFileError>;
