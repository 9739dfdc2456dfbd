//! Serde-facing policy configuration.
//!
//! Every field is optional. A missing `fields` list falls back to
//! [`DEFAULT_SENSITIVE_FIELDS`]; `extra_fields` is appended after it, so a
//! deployment can extend the reference set without restating it.
//!
//! ```json
//! { "fields": ["password", "token"], "marker": "[FILTERED]", "max_depth": 128 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::field::{
    DEFAULT_MAX_DEPTH, DEFAULT_SENSITIVE_FIELDS, FILTERED_PLACEHOLDER, FieldPolicy,
};
use crate::error::{PolicyError, Result};

/// Redaction settings as read from a config file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    /// Case-insensitive substring patterns.
    pub fields: Vec<String>,

    /// Patterns appended after `fields`.
    pub extra_fields: Vec<String>,

    /// Replacement for sensitive values.
    pub marker: String,

    /// Deepest container nesting that is traversed, at most
    /// [`MAX_DEPTH_LIMIT`](super::field::MAX_DEPTH_LIMIT).
    pub max_depth: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            fields: DEFAULT_SENSITIVE_FIELDS
                .iter()
                .map(|field| (*field).to_string())
                .collect(),
            extra_fields: Vec::new(),
            marker: FILTERED_PLACEHOLDER.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl PolicyConfig {
    /// Parses a config from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Loads a config from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Validates the config into a [`FieldPolicy`].
    pub fn into_policy(self) -> Result<FieldPolicy> {
        FieldPolicy::builder()
            .fields(self.fields)
            .fields(self.extra_fields)
            .marker(self.marker)
            .max_depth(self.max_depth)
            .build()
    }
}

impl TryFrom<PolicyConfig> for FieldPolicy {
    type Error = PolicyError;

    fn try_from(config: PolicyConfig) -> Result<Self> {
        config.into_policy()
    }
}

impl From<&FieldPolicy> for PolicyConfig {
    fn from(policy: &FieldPolicy) -> Self {
        Self {
            fields: policy.patterns().to_vec(),
            extra_fields: Vec::new(),
            marker: policy.marker().to_string(),
            max_depth: policy.max_depth(),
        }
    }
}
