//! # Error Types: Structured Error Hierarchy
//!
//! Errors raised while constructing the foundational value types of the
//! estimator. All errors use `thiserror` for derive-based `Display` and
//! `Error` implementations.
//!
//! Engine outcomes (no eligible package, invalid selection) are NOT errors at
//! this level: they travel as data inside the cost breakdown. The types here
//! cover the construction of identifiers, amounts, tenures and entity types
//! from untrusted input (catalog files, request bodies, CLI flags).

use thiserror::Error;

/// Top-level error type for the estimator's foundational layer.
#[derive(Error, Debug)]
pub enum FzeError {
    /// A domain value failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Arithmetic on amounts overflowed the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for domain primitive construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Activity identifier is empty.
    #[error("invalid activity ID: must be non-empty")]
    InvalidActivityId,

    /// Package identifier is empty.
    #[error("invalid package ID: must be non-empty")]
    InvalidPackageId,

    /// Visa type identifier is empty.
    #[error("invalid visa type ID: must be non-empty")]
    InvalidVisaTypeId,

    /// Zone name is empty.
    #[error("invalid zone name: must be non-empty")]
    InvalidZoneName,

    /// Entity type is not one of the supported legal structures.
    #[error("unknown entity type: \"{0}\" (expected llc, fze, fzco, branch or freelance)")]
    UnknownEntityType(String),

    /// Package type is not one of the supported package classes.
    #[error("unknown package type: \"{0}\" (expected company, establishment, branch or freelance)")]
    UnknownPackageType(String),

    /// Tenure is not one of the priced tenure buckets.
    #[error("unsupported tenure: {0} years (expected 1, 3 or 5)")]
    UnsupportedTenure(u32),

    /// Amount could not be parsed.
    #[error("invalid amount: \"{value}\" ({reason})")]
    InvalidAmount {
        /// The input that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Float values are not permitted for amounts.
    #[error("float values are not permitted for amounts; use a string or integer: {0}")]
    FloatRejected(String),

    /// Amount is negative where only non-negative values are allowed.
    #[error("amount must be non-negative, got {0}")]
    NegativeAmount(String),
}
