use thiserror::Error;

/// Errors raised when the engine is configured with malformed input.
///
/// These are programmer errors surfaced at configuration time. Conditions
/// discovered while validating data (failed rules, unknown rule names) are
/// never represented here; they accumulate in
/// [`ValidationErrors`](crate::ValidationErrors) instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Custom rule name is empty or contains a reserved separator.
    #[error("invalid rule name {name:?}: must be non-empty and contain neither '|' nor ':'")]
    InvalidRuleName { name: String },
    /// Message override key does not follow the `field.rule` form.
    #[error("malformed message key {key:?}: expected \"field.rule\"")]
    MalformedMessageKey { key: String },
    /// Input value handed to the validator is not a JSON object.
    #[error("input data must be a JSON object")]
    NotAnObject,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
