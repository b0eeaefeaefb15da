//! Catalog-specific error types.
//!
//! Structured errors for catalog loading and validation. All errors carry
//! enough context (file path, record kind and id, offending field) to point
//! a catalog maintainer at the exact line to fix.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// YAML parsing failed.
    #[error("failed to parse YAML at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing failed.
    #[error("failed to parse JSON at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The catalog file was not found.
    #[error("catalog file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The file extension does not identify a supported format.
    #[error("unsupported catalog format for {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// Two records of the same kind share an identifier.
    #[error("duplicate {kind} id {id:?}")]
    DuplicateId { kind: &'static str, id: String },

    /// A monetary field holds a negative amount.
    #[error("{kind} {id:?}: {field} must be non-negative, got {value}")]
    NegativeAmount {
        kind: &'static str,
        id: String,
        field: &'static str,
        value: String,
    },

    /// A record is structurally invalid.
    #[error("{kind} {id:?}: {detail}")]
    InvalidRecord {
        kind: &'static str,
        id: String,
        detail: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic serde_json error (not file-specific).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
