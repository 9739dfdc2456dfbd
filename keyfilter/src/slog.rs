//! Adapters for emitting redacted values through `slog`.
//!
//! This module connects [`FieldPolicy`] redaction with `slog` by providing
//! `slog::Value` implementations that serialize redacted outputs as structured
//! JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is derived from redaction under a
//!   policy, not from the original value.
//! - Avoiding fallible logging APIs: serialization failures are represented as
//!   placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or choose a policy.

use serde::Serialize;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

pub use crate::redaction::RedactedJson;
use crate::{
    policy::FieldPolicy,
    redaction::{RedactedJsonExt, RedactedOutput},
};

/// Marker trait for types whose `slog` integration always emits redacted output.
///
/// This trait is implemented only for sink adapters that redact before
/// logging. It is not a blanket impl for raw types.
///
/// ```compile_fail
/// use keyfilter::slog::SlogRedacted;
///
/// fn assert_slog_redacted<T: SlogRedacted>() {}
///
/// assert_slog_redacted::<String>();
/// ```
pub trait SlogRedacted: SlogValue {}

impl<T: SlogRedacted + ?Sized> SlogRedacted for &T {}

impl SlogValue for RedactedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value().clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl SlogRedacted for RedactedJson {}

impl SlogValue for RedactedOutput {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        match self {
            RedactedOutput::Text(text) => serializer.emit_str(key, text),
            RedactedOutput::Json(json) => {
                let nested = slog::Serde(json.clone());
                SlogValue::serialize(&nested, record, key, serializer)
            }
        }
    }
}

impl SlogRedacted for RedactedOutput {}

/// Extension trait for logging redacted values through slog as JSON.
///
/// The value is serialized, redacted under `policy`, and stored as a
/// `serde_json::Value`. The original value is never handed to slog.
///
/// ## Example
/// ```ignore
/// use keyfilter::slog::SlogRedactExt;
///
/// info!(logger, "request"; "body" => body.slog_redacted(&policy));
/// ```
pub trait SlogRedactExt {
    /// Redacts `self` and returns a `slog::Value` that serializes as structured JSON.
    fn slog_redacted(&self, policy: &FieldPolicy) -> RedactedJson;
}

impl<T> SlogRedactExt for T
where
    T: Serialize + ?Sized,
{
    fn slog_redacted(&self, policy: &FieldPolicy) -> RedactedJson {
        self.redacted_json(policy)
    }
}

#[cfg(feature = "record")]
impl crate::record::LogRecord {
    /// Logs this record through `logger` at the matching slog level.
    ///
    /// The redacted record is attached under the `record` key.
    pub fn log_slog(&self, logger: &slog::Logger, policy: &FieldPolicy) {
        use crate::record::Level;

        let record = self.redacted_json(policy);
        match self.level() {
            Level::Debug => slog::debug!(logger, "{}", self.message(); "record" => record),
            Level::Info => slog::info!(logger, "{}", self.message(); "record" => record),
            Level::Warn => slog::warn!(logger, "{}", self.message(); "record" => record),
            Level::Error => slog::error!(logger, "{}", self.message(); "record" => record),
        }
    }
}
