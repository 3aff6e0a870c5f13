//! Declarative rule-string validation engine over JSON-shaped input.
//!
//! Rules are written in the compact `"required|string|min:3"` syntax and
//! assigned to field paths, which may reach into nested objects via dots
//! (`"emails.email_confirm"`). A [`Validator`] evaluates every rule of
//! every field, accumulating one message per failed rule into
//! [`ValidationErrors`], and can hand back an HTML-safe sanitized copy of
//! the input.
//!
//! # Example
//!
//! ```
//! use formguard_validate::Validator;
//! use serde_json::json;
//!
//! let mut validator = Validator::from_value(json!({
//!     "name": "John_Doe",
//!     "age": "17",
//! }))
//! .expect("object input");
//!
//! validator.set_rules([
//!     ("name", "required|string|alpha_dash"),
//!     ("age", "required|numeric|min:18"),
//! ]);
//!
//! assert!(!validator.validate());
//! assert_eq!(
//!     validator.errors().messages("age"),
//!     &["age must be at least 18."]
//! );
//! assert!(validator.errors().messages("name").is_empty());
//! ```

mod checks;
mod messages;
pub mod path;
pub mod rules;
pub mod sanitize;
mod validator;

pub use formguard_model::{ConfigError, ValidationErrors};
pub use rules::{BuiltinRule, RuleInvocation};
pub use validator::Validator;
