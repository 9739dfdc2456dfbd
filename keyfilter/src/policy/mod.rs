//! Field policies: which keys are sensitive and what replaces them.
//!
//! This module provides:
//!
//! - **Field policy** (`field`): [`FieldPolicy`], the immutable set of
//!   case-insensitive substring patterns plus the redaction marker and depth
//!   bound, and its [`FieldPolicyBuilder`].
//!
//! - **Config** (`config`): [`PolicyConfig`], the serde-facing configuration
//!   surface that is loaded once at startup and validated into a policy.
//!
//! # Example
//!
//! ```rust
//! use keyfilter::FieldPolicy;
//!
//! let policy = FieldPolicy::builder()
//!     .fields(["password", "token"])
//!     .build()
//!     .unwrap();
//!
//! assert!(policy.is_sensitive("UserPassword"));
//! assert!(policy.is_sensitive("refresh_token"));
//! assert!(!policy.is_sensitive("passphrase"));
//! ```

pub mod config;
pub mod field;

pub use config::PolicyConfig;
pub use field::{
    DEFAULT_MAX_DEPTH, DEFAULT_SENSITIVE_FIELDS, FILTERED_PLACEHOLDER, FieldPolicy,
    FieldPolicyBuilder, MAX_DEPTH_LIMIT, TRUNCATED_PLACEHOLDER,
};
