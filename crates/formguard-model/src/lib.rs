//! Data model types for the formguard validation engine.
//!
//! This crate holds everything the engine shares with its callers:
//!
//! - [`ValidationErrors`]: per-field accumulation of error messages
//! - [`ConfigError`]: fail-fast errors for malformed configuration
//! - [`value`]: loose coercion helpers over [`serde_json::Value`]
//!
//! Input data is represented as `serde_json::Map<String, Value>`, which
//! already models the full value space the engine works over (null,
//! boolean, number, text, list, map).

pub mod error;
pub mod report;
pub mod value;

pub use error::{ConfigError, Result};
pub use report::ValidationErrors;
