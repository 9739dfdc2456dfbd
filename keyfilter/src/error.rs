//! Errors raised while building a [`FieldPolicy`](crate::FieldPolicy).
//!
//! Redaction itself is infallible. The only fallible surface is turning
//! configuration into a validated policy.

use thiserror::Error;

/// Result alias for policy construction and config loading.
pub type Result<T> = std::result::Result<T, PolicyError>;

/// Errors that can occur while building or loading a policy.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// The policy has no patterns at all.
    #[error("policy must contain at least one field pattern")]
    NoPatterns,

    /// A pattern is empty (or whitespace only) and would match every key.
    #[error("field pattern at index {index} is empty")]
    EmptyPattern { index: usize },

    /// The redaction marker is empty.
    #[error("redaction marker must not be empty")]
    EmptyMarker,

    /// The depth bound is above what the walker may recurse.
    #[error("max_depth {max_depth} exceeds the limit of {limit}")]
    DepthLimitExceeded { max_depth: usize, limit: usize },

    /// I/O error while reading a config file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for `PolicyConfig`.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
