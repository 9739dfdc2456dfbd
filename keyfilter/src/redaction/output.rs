//! Output types for logging boundaries.
//!
//! This module provides types for producing logging-safe output:
//!
//! - [`RedactedOutput`]: The output enum (Text or Json)
//! - [`ToRedactedOutput`]: Serializes any `Serialize` type and redacts it
//! - [`RedactedJson`]: A redacted JSON value handed to log sinks
//! - [`RedactedJsonExt`]: Provides `.redacted_json(&policy)`

use std::fmt;

use serde::Serialize;
use serde_json::Value as JsonValue;

use super::walk::redact_owned_with_summary;
use crate::policy::FieldPolicy;

/// Placeholder emitted when a value cannot be turned into JSON.
///
/// The serializer's own message is not included: custom `Serialize` impls may
/// put raw field contents in their errors.
pub const UNSERIALIZABLE_PLACEHOLDER: &str = "[UNSERIALIZABLE]";

// =============================================================================
// RedactedOutput - Output produced at logging boundaries
// =============================================================================

/// Output produced at a logging boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RedactedOutput {
    Text(String),
    Json(JsonValue),
}

impl RedactedOutput {
    /// Converts the output into JSON; text becomes a JSON string.
    pub fn into_json(self) -> JsonValue {
        match self {
            RedactedOutput::Text(text) => JsonValue::String(text),
            RedactedOutput::Json(json) => json,
        }
    }
}

impl fmt::Display for RedactedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedactedOutput::Text(text) => f.write_str(text),
            RedactedOutput::Json(json) => fmt::Display::fmt(json, f),
        }
    }
}

// =============================================================================
// ToRedactedOutput - Trait for producing logging-safe output
// =============================================================================

/// Produces a logging-safe output representation under a policy.
///
/// Implemented for every `Serialize` type. Serialization failures never
/// propagate: they yield [`UNSERIALIZABLE_PLACEHOLDER`] as text. With the
/// `tracing` feature, a failure logs a warning and a truncated branch logs a
/// debug event.
pub trait ToRedactedOutput {
    #[must_use]
    fn to_redacted_output(&self, policy: &FieldPolicy) -> RedactedOutput;
}

impl<T> ToRedactedOutput for T
where
    T: Serialize + ?Sized,
{
    fn to_redacted_output(&self, policy: &FieldPolicy) -> RedactedOutput {
        match serde_json::to_value(self) {
            Ok(json) => {
                let redacted = redact_owned_with_summary(json, policy);
                #[cfg(feature = "tracing")]
                if redacted.summary.truncated_branches > 0 {
                    tracing::debug!(
                        truncated_branches = redacted.summary.truncated_branches,
                        max_depth = policy.max_depth(),
                        "redacted output truncated past the depth bound"
                    );
                }
                RedactedOutput::Json(redacted.value)
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    category = ?err.classify(),
                    "failed to serialize value for redaction"
                );
                #[cfg(not(feature = "tracing"))]
                let _ = err;
                RedactedOutput::Text(UNSERIALIZABLE_PLACEHOLDER.to_string())
            }
        }
    }
}

/// Serializes `value` and redacts the result.
pub fn redact_serialize<T>(value: &T, policy: &FieldPolicy) -> RedactedOutput
where
    T: Serialize + ?Sized,
{
    value.to_redacted_output(policy)
}

// =============================================================================
// RedactedJson - Redacted JSON for log sinks
// =============================================================================

/// A JSON value that has already been through redaction.
///
/// Only produced from redacted output, so sinks that accept `RedactedJson`
/// cannot be handed a raw payload by accident.
#[derive(Clone, Debug, PartialEq)]
pub struct RedactedJson(JsonValue);

impl RedactedJson {
    /// Redacts `value` under `policy`.
    pub fn new<T>(value: &T, policy: &FieldPolicy) -> Self
    where
        T: Serialize + ?Sized,
    {
        Self(value.to_redacted_output(policy).into_json())
    }

    /// Returns the redacted JSON.
    pub fn value(&self) -> &JsonValue {
        &self.0
    }

    /// Consumes the wrapper and returns the redacted JSON.
    pub fn into_value(self) -> JsonValue {
        self.0
    }
}

impl From<RedactedOutput> for RedactedJson {
    fn from(output: RedactedOutput) -> Self {
        Self(output.into_json())
    }
}

impl fmt::Display for RedactedJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Extension trait to obtain redacted JSON for any serializable value.
pub trait RedactedJsonExt {
    /// Serializes and redacts `self` under `policy`.
    fn redacted_json(&self, policy: &FieldPolicy) -> RedactedJson;
}

impl<T> RedactedJsonExt for T
where
    T: Serialize + ?Sized,
{
    fn redacted_json(&self, policy: &FieldPolicy) -> RedactedJson {
        RedactedJson::new(self, policy)
    }
}
