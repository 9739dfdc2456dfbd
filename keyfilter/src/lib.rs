//! Key-name based redaction for structured log payloads.
//!
//! This crate separates:
//! - **Field policies**: which mapping keys are sensitive (case-insensitive
//!   substring patterns) and what replaces their values.
//! - **Redaction**: a depth-first walk over `serde_json::Value` that rebuilds
//!   the value with sensitive subtrees replaced by the policy marker.
//!
//! What this crate does:
//! - defines [`FieldPolicy`] and its serde-facing [`PolicyConfig`]
//! - defines the [`redact`] entrypoint and its owned and summary variants
//! - renders log records with redacted metadata (`record` feature)
//! - provides integrations behind feature flags (`slog`, `tracing`)
//!
//! What it does not do:
//! - inspect values: matching looks at keys only
//! - perform I/O beyond reading a config file, or configure loggers
//!
//! ```rust
//! use keyfilter::{FieldPolicy, redact};
//! use serde_json::json;
//!
//! let policy = FieldPolicy::default();
//! let body = json!({"email": "a@b.com", "items": [{"name": "ok", "pin": 1234}]});
//!
//! assert_eq!(
//!     redact(&body, &policy),
//!     json!({"email": "[FILTERED]", "items": [{"name": "ok", "pin": "[FILTERED]"}]})
//! );
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
pub mod error;
pub mod policy;
#[cfg(feature = "record")]
pub mod record;
mod redaction;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use error::{PolicyError, Result};
// Re-exports from policy module
pub use policy::{
    DEFAULT_MAX_DEPTH, DEFAULT_SENSITIVE_FIELDS, FILTERED_PLACEHOLDER, FieldPolicy,
    FieldPolicyBuilder, MAX_DEPTH_LIMIT, PolicyConfig, TRUNCATED_PLACEHOLDER,
};
#[cfg(feature = "record")]
pub use record::{Level, LogRecord};
// Re-exports from redaction module
pub use redaction::{
    Redacted, RedactedJson, RedactedJsonExt, RedactedOutput, RedactionSummary, ToRedactedOutput,
    UNSERIALIZABLE_PLACEHOLDER, redact, redact_owned, redact_serialize, redact_with_summary,
};
#[cfg(feature = "slog")]
pub use self::slog::{SlogRedactExt, SlogRedacted};
#[cfg(feature = "tracing")]
pub use self::tracing::{TracingRedactExt, TracingRedacted};
