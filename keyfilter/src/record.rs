//! Structured log records with redacted metadata.
//!
//! A [`LogRecord`] is the envelope a logging pipeline writes: timestamp,
//! level, service name, message, and free-form metadata. Only the metadata is
//! redacted. The envelope is produced by the caller and is written as is.
//!
//! ```rust
//! use keyfilter::{FieldPolicy, Level, LogRecord};
//! use serde_json::json;
//!
//! let record = LogRecord::new(Level::Info, "backend-requests", "Request started")
//!     .with_meta(json!({"method": "POST", "body": {"password": "hunter2"}}));
//!
//! let json = record.to_json(&FieldPolicy::default());
//! assert_eq!(json["level"], "INFO");
//! assert_eq!(json["body"]["password"], "[FILTERED]");
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    policy::FieldPolicy,
    redaction::{RedactedJson, RedactedOutput, redact},
};

/// Timestamp layout of rendered records, millisecond precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Key that holds metadata which is not a mapping.
pub const META_KEY: &str = "meta";

/// Record severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Upper-case name as written into records.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A log record whose metadata is redacted on render.
///
/// The raw metadata is kept private and there is no `Serialize` impl, so the
/// record cannot be written without going through a policy.
#[derive(Clone, Debug, PartialEq)]
pub struct LogRecord {
    timestamp: DateTime<Utc>,
    level: Level,
    service: String,
    message: String,
    meta: Value,
}

impl LogRecord {
    /// Creates a record stamped with the current time and no metadata.
    pub fn new(level: Level, service: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            service: service.into(),
            message: message.into(),
            meta: Value::Null,
        }
    }

    /// Attaches metadata. Replaces any metadata set earlier.
    #[must_use]
    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = meta;
        self
    }

    /// Overrides the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Renders the record as a JSON object.
    ///
    /// Envelope keys come first: `timestamp`, `level`, `service`, `message`.
    /// Redacted metadata follows. A mapping is flattened into the record and
    /// its keys never overwrite envelope keys; any other non-null metadata is
    /// stored under [`META_KEY`].
    pub fn to_json(&self, policy: &FieldPolicy) -> Value {
        let mut out = Map::new();
        out.insert(
            "timestamp".into(),
            Value::String(self.timestamp.format(TIMESTAMP_FORMAT).to_string()),
        );
        out.insert("level".into(), Value::String(self.level.as_str().into()));
        out.insert("service".into(), Value::String(self.service.clone()));
        out.insert("message".into(), Value::String(self.message.clone()));

        match self.redacted_meta(policy) {
            Value::Null => {}
            Value::Object(fields) => {
                for (key, field) in fields {
                    out.entry(key).or_insert(field);
                }
            }
            other => {
                out.entry(META_KEY).or_insert(other);
            }
        }
        Value::Object(out)
    }

    /// The metadata alone, redacted.
    pub(crate) fn redacted_meta(&self, policy: &FieldPolicy) -> Value {
        redact(&self.meta, policy)
    }

    /// Renders the record as a single JSON line without a trailing newline.
    pub fn to_line(&self, policy: &FieldPolicy) -> String {
        self.to_json(policy).to_string()
    }

    /// Renders the record as [`RedactedJson`] for structured sinks.
    pub fn redacted_json(&self, policy: &FieldPolicy) -> RedactedJson {
        RedactedJson::from(RedactedOutput::Json(self.to_json(policy)))
    }
}
