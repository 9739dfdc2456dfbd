//! Redaction traversal and entrypoints.
//!
//! This module provides the machinery for applying a [`FieldPolicy`]:
//!
//! - **`walk`**: The depth-first traversal (`redact`, `redact_owned`,
//!   `redact_with_summary`)
//! - **`output`**: Output types for logging boundaries (`RedactedOutput`,
//!   `ToRedactedOutput`, `RedactedJson`)
//!
//! Field policies and their configuration live in `crate::policy`.
//!
//! [`FieldPolicy`]: crate::FieldPolicy

mod output;
mod walk;

pub use output::{
    RedactedJson, RedactedJsonExt, RedactedOutput, ToRedactedOutput, UNSERIALIZABLE_PLACEHOLDER,
    redact_serialize,
};
pub use walk::{Redacted, RedactionSummary, redact, redact_owned, redact_with_summary};
