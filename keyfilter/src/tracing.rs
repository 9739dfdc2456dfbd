//! Adapters for emitting redacted values through `tracing`.
//!
//! - **`TracingRedactExt`**: Logs a value as the display string of its redacted
//!   JSON. Works with any tracing subscriber but the structure is flattened to
//!   text.
//! - **`redacted_field`**: Wraps output that has already been redacted. The
//!   [`TracingRedacted`] bound keeps raw values out.
//! - **`LogRecord::emit_tracing`** (with the `record` feature): emits a whole
//!   record as a tracing event at its level.
//!
//! # Example
//!
//! ```ignore
//! use keyfilter::tracing::TracingRedactExt;
//!
//! tracing::info!(body = %payload.tracing_redacted(&policy), "request received");
//! ```

use std::fmt;

use tracing::field::{DisplayValue, display};

use crate::{
    policy::FieldPolicy,
    redaction::{RedactedJson, RedactedOutput, ToRedactedOutput},
};

/// Marker trait for types whose `tracing` integration always emits redacted output.
///
/// Implemented only for outputs that have already been redacted. It is not a
/// blanket impl for raw types.
///
/// ```compile_fail
/// use keyfilter::tracing::redacted_field;
///
/// let _ = redacted_field(&String::from("raw"));
/// ```
pub trait TracingRedacted {}

impl<T: TracingRedacted + ?Sized> TracingRedacted for &T {}

impl TracingRedacted for RedactedOutput {}

impl TracingRedacted for RedactedJson {}

/// Wraps redacted output as a display field.
pub fn redacted_field<T>(value: &T) -> DisplayValue<String>
where
    T: TracingRedacted + fmt::Display + ?Sized,
{
    display(value.to_string())
}

/// Extension trait for logging redacted values as display strings.
pub trait TracingRedactExt {
    /// Redacts the value under `policy` and wraps its text for a tracing field.
    fn tracing_redacted(&self, policy: &FieldPolicy) -> DisplayValue<String>;
}

impl<T> TracingRedactExt for T
where
    T: ToRedactedOutput + ?Sized,
{
    fn tracing_redacted(&self, policy: &FieldPolicy) -> DisplayValue<String> {
        redacted_field(&self.to_redacted_output(policy))
    }
}

#[cfg(feature = "record")]
impl crate::record::LogRecord {
    /// Emits this record as a tracing event at the matching level.
    ///
    /// `service` and the redacted metadata (`meta`, compact JSON) are recorded
    /// as fields; the message is the event message.
    pub fn emit_tracing(&self, policy: &FieldPolicy) {
        use crate::record::Level;

        let meta = RedactedJson::from(RedactedOutput::Json(self.redacted_meta(policy)));
        let meta = redacted_field(&meta);
        let service = self.service();
        let message = self.message();
        match self.level() {
            Level::Debug => tracing::debug!(service, meta, "{message}"),
            Level::Info => tracing::info!(service, meta, "{message}"),
            Level::Warn => tracing::warn!(service, meta, "{message}"),
            Level::Error => tracing::error!(service, meta, "{message}"),
        }
    }
}
