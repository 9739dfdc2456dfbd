//! Key-name matching rules.
//!
//! A [`FieldPolicy`] decides sensitivity from a mapping key alone. A key is
//! sensitive when its lower-cased form contains any configured pattern as a
//! substring. Values are never inspected.

use std::{borrow::Cow, sync::OnceLock};

use crate::error::{PolicyError, Result};

/// Default marker substituted for the value of a sensitive key.
pub const FILTERED_PLACEHOLDER: &str = "[FILTERED]";

/// Marker substituted for a container nested deeper than the policy allows.
pub const TRUNCATED_PLACEHOLDER: &str = "[TRUNCATED]";

/// Default container depth bound. Matches serde_json's parser recursion limit,
/// so anything parsed from text fits.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Highest accepted depth bound. Redaction recurses once per container level,
/// so this caps stack use regardless of input.
pub const MAX_DEPTH_LIMIT: usize = 1024;

/// Reference pattern set used when no patterns are configured.
///
/// Identifying fields (`username`, `email`) sit next to secrets here. Drop them
/// through configuration if your deployment logs them on purpose.
pub const DEFAULT_SENSITIVE_FIELDS: &[&str] = &[
    "password",
    "pass",
    "pwd",
    "secret",
    "token",
    "accesstoken",
    "refreshtoken",
    "authorization",
    "auth",
    "apikey",
    "api_key",
    "username",
    "email",
    "creditcard",
    "ssn",
    "socialsecuritynumber",
    "pin",
    "cvv",
    "cvc",
];

// =============================================================================
// FieldPolicy
// =============================================================================

/// Immutable redaction policy.
///
/// Patterns are stored lower-cased and deduplicated in first-seen order.
/// Build one at startup and share it by reference or `Arc`; the type holds
/// no interior mutability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldPolicy {
    patterns: Vec<String>,
    marker: String,
    max_depth: usize,
}

impl FieldPolicy {
    /// Builds a policy from `patterns` with the default marker and depth bound.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder().fields(patterns).build()
    }

    /// Starts an empty builder.
    #[must_use]
    pub fn builder() -> FieldPolicyBuilder {
        FieldPolicyBuilder::default()
    }

    /// Process-wide default policy, built on first use.
    pub fn shared_default() -> &'static FieldPolicy {
        static DEFAULT: OnceLock<FieldPolicy> = OnceLock::new();
        DEFAULT.get_or_init(FieldPolicy::default)
    }

    /// Lower-cased patterns in match order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Marker substituted for sensitive values.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Deepest container nesting that is traversed. The root sits at depth 0.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns `true` if `key` names a sensitive field.
    ///
    /// Matching is case-insensitive substring containment: `"userPassword"`
    /// matches `"password"`, `"passphrase"` does not.
    pub fn is_sensitive(&self, key: &str) -> bool {
        let key = lowercase(key);
        self.patterns
            .iter()
            .any(|pattern| key.contains(pattern.as_str()))
    }
}

impl Default for FieldPolicy {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_SENSITIVE_FIELDS
                .iter()
                .map(|field| (*field).to_string())
                .collect(),
            marker: FILTERED_PLACEHOLDER.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

fn lowercase(value: &str) -> Cow<'_, str> {
    if value.chars().any(char::is_uppercase) {
        Cow::Owned(value.to_lowercase())
    } else {
        Cow::Borrowed(value)
    }
}

// =============================================================================
// FieldPolicyBuilder
// =============================================================================

/// Builder for [`FieldPolicy`]. Validation happens in [`build`](Self::build).
#[derive(Clone, Debug)]
pub struct FieldPolicyBuilder {
    patterns: Vec<String>,
    marker: String,
    max_depth: usize,
}

impl Default for FieldPolicyBuilder {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            marker: FILTERED_PLACEHOLDER.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl FieldPolicyBuilder {
    /// Appends a single pattern.
    #[must_use]
    pub fn field(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Appends several patterns, keeping their order.
    #[must_use]
    pub fn fields<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Appends [`DEFAULT_SENSITIVE_FIELDS`].
    #[must_use]
    pub fn with_default_fields(self) -> Self {
        self.fields(DEFAULT_SENSITIVE_FIELDS.iter().copied())
    }

    /// Uses a specific redaction marker.
    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Sets the container depth bound. Must not exceed [`MAX_DEPTH_LIMIT`].
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Validates and freezes the policy.
    ///
    /// Patterns are trimmed and lower-cased; duplicates after normalization
    /// are dropped. Fails if there are no patterns, if any pattern is blank,
    /// if the marker is empty, or if the depth bound is above
    /// [`MAX_DEPTH_LIMIT`].
    pub fn build(self) -> Result<FieldPolicy> {
        if self.patterns.is_empty() {
            return Err(PolicyError::NoPatterns);
        }
        if self.marker.is_empty() {
            return Err(PolicyError::EmptyMarker);
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(PolicyError::DepthLimitExceeded {
                max_depth: self.max_depth,
                limit: MAX_DEPTH_LIMIT,
            });
        }

        let mut patterns: Vec<String> = Vec::with_capacity(self.patterns.len());
        for (index, raw) in self.patterns.iter().enumerate() {
            let pattern = raw.trim().to_lowercase();
            if pattern.is_empty() {
                return Err(PolicyError::EmptyPattern { index });
            }
            if !patterns.contains(&pattern) {
                patterns.push(pattern);
            }
        }

        Ok(FieldPolicy {
            patterns,
            marker: self.marker,
            max_depth: self.max_depth,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
