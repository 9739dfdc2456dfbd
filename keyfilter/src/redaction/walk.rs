//! Depth-first redaction of `serde_json::Value` trees.
//!
//! Sequences are traversed element by element. Mappings are rebuilt in their
//! original key order; a key the policy marks as sensitive gets the marker in
//! place of its whole subtree, which is never visited. Scalars pass through.
//!
//! Containers nested past [`FieldPolicy::max_depth`] are replaced by
//! [`TRUNCATED_PLACEHOLDER`]. Truncation is counted in the
//! [`RedactionSummary`] and is never an error. The walk itself has no side
//! effects; reporting is left to the output adapters.

use serde_json::{Map, Value};

use crate::policy::{FieldPolicy, TRUNCATED_PLACEHOLDER};

// =============================================================================
// Summary types
// =============================================================================

/// Counters collected during one redaction pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedactionSummary {
    /// Values replaced by the policy marker.
    pub filtered_fields: usize,
    /// Containers replaced because they sat past the depth bound.
    pub truncated_branches: usize,
}

impl RedactionSummary {
    /// Returns `true` if nothing was filtered or truncated.
    pub fn is_clean(&self) -> bool {
        self.filtered_fields == 0 && self.truncated_branches == 0
    }
}

/// A redacted value together with what happened to produce it.
#[derive(Clone, Debug, PartialEq)]
pub struct Redacted {
    pub value: Value,
    pub summary: RedactionSummary,
}

// =============================================================================
// Entrypoints
// =============================================================================

/// Returns a redacted copy of `value`. The input is left untouched.
///
/// ```rust
/// use keyfilter::{FieldPolicy, redact};
/// use serde_json::json;
///
/// let policy = FieldPolicy::default();
/// let payload = json!({"user": "ann", "auth": {"token": "abc"}, "items": [1, 2]});
///
/// assert_eq!(
///     redact(&payload, &policy),
///     json!({"user": "ann", "auth": "[FILTERED]", "items": [1, 2]})
/// );
/// ```
#[must_use]
pub fn redact(value: &Value, policy: &FieldPolicy) -> Value {
    Walker::new(policy).borrowed(value, 0)
}

/// Redacts `value` in a single pass, moving unmatched leaves instead of
/// cloning them.
///
/// Sensitive and truncated subtrees are dropped here. Dropping still walks
/// them, so prefer [`redact`] for inputs of unknown depth.
#[must_use]
pub fn redact_owned(value: Value, policy: &FieldPolicy) -> Value {
    Walker::new(policy).owned(value, 0)
}

/// Owned counterpart of [`redact_with_summary`].
pub(crate) fn redact_owned_with_summary(value: Value, policy: &FieldPolicy) -> Redacted {
    let mut walker = Walker::new(policy);
    let value = walker.owned(value, 0);
    Redacted {
        value,
        summary: walker.summary,
    }
}

/// Like [`redact`], but also reports how many fields were filtered and how
/// many branches were truncated.
#[must_use]
pub fn redact_with_summary(value: &Value, policy: &FieldPolicy) -> Redacted {
    let mut walker = Walker::new(policy);
    let value = walker.borrowed(value, 0);
    Redacted {
        value,
        summary: walker.summary,
    }
}

impl FieldPolicy {
    /// Shorthand for [`redact`] with this policy.
    #[must_use]
    pub fn redact(&self, value: &Value) -> Value {
        redact(value, self)
    }
}

// =============================================================================
// Walker
// =============================================================================

struct Walker<'p> {
    policy: &'p FieldPolicy,
    summary: RedactionSummary,
}

impl<'p> Walker<'p> {
    fn new(policy: &'p FieldPolicy) -> Self {
        Self {
            policy,
            summary: RedactionSummary::default(),
        }
    }

    fn borrowed(&mut self, value: &Value, depth: usize) -> Value {
        match value {
            Value::Array(items) => {
                if depth > self.policy.max_depth() {
                    return self.truncated();
                }
                Value::Array(
                    items
                        .iter()
                        .map(|item| self.borrowed(item, depth + 1))
                        .collect(),
                )
            }
            Value::Object(fields) => {
                if depth > self.policy.max_depth() {
                    return self.truncated();
                }
                let mut out = Map::with_capacity(fields.len());
                for (key, field) in fields {
                    let redacted = if self.policy.is_sensitive(key) {
                        self.filtered()
                    } else {
                        self.borrowed(field, depth + 1)
                    };
                    out.insert(key.clone(), redacted);
                }
                Value::Object(out)
            }
            scalar => scalar.clone(),
        }
    }

    fn owned(&mut self, value: Value, depth: usize) -> Value {
        match value {
            Value::Array(items) => {
                if depth > self.policy.max_depth() {
                    return self.truncated();
                }
                Value::Array(
                    items
                        .into_iter()
                        .map(|item| self.owned(item, depth + 1))
                        .collect(),
                )
            }
            Value::Object(fields) => {
                if depth > self.policy.max_depth() {
                    return self.truncated();
                }
                let mut out = Map::with_capacity(fields.len());
                for (key, field) in fields {
                    let redacted = if self.policy.is_sensitive(&key) {
                        self.filtered()
                    } else {
                        self.owned(field, depth + 1)
                    };
                    out.insert(key, redacted);
                }
                Value::Object(out)
            }
            scalar => scalar,
        }
    }

    fn filtered(&mut self) -> Value {
        self.summary.filtered_fields += 1;
        Value::String(self.policy.marker().to_string())
    }

    fn truncated(&mut self) -> Value {
        self.summary.truncated_branches += 1;
        Value::String(TRUNCATED_PLACEHOLDER.to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================
