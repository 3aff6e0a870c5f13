//! Error message resolution: overrides first, templated defaults second.

use std::collections::HashMap;

use formguard_model::{ConfigError, Result};

use crate::checks::Outcome;
use crate::rules::BuiltinRule;

/// Message overrides, stored as `field -> rule -> message`.
///
/// The external form is a flat `"field.rule"` key. Field paths contain
/// dots, so the rule name is everything after the LAST dot.
#[derive(Debug, Default)]
pub(crate) struct MessageTable {
    overrides: HashMap<String, HashMap<String, String>>,
}

impl MessageTable {
    pub(crate) fn from_flat<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut overrides: HashMap<String, HashMap<String, String>> = HashMap::new();
        for (key, message) in entries {
            let key = key.into();
            let Some((field, rule)) = key.rsplit_once('.') else {
                return Err(ConfigError::MalformedMessageKey { key });
            };
            overrides
                .entry(field.to_string())
                .or_default()
                .insert(rule.to_string(), message.into());
        }
        Ok(Self { overrides })
    }

    pub(crate) fn get(&self, field: &str, rule: &str) -> Option<&str> {
        self.overrides
            .get(field)
            .and_then(|rules| rules.get(rule))
            .map(String::as_str)
    }
}

/// Default message for a failed built-in rule, with the field path and raw
/// parameter substituted. The min/max templates append " characters" when
/// the failure came from the string-length branch.
pub(crate) fn default_message(
    rule: BuiltinRule,
    field: &str,
    param: Option<&str>,
    outcome: Outcome,
) -> String {
    let param = param.unwrap_or_default();
    let lengthwise = outcome == Outcome::FailLength;
    match rule {
        BuiltinRule::Required => format!("{field} is required."),
        BuiltinRule::StringType => format!("{field} must be a string."),
        BuiltinRule::Integer => format!("{field} must be an integer."),
        BuiltinRule::Min if lengthwise => format!("{field} must be at least {param} characters."),
        BuiltinRule::Min => format!("{field} must be at least {param}."),
        BuiltinRule::Max if lengthwise => format!("{field} must not exceed {param} characters."),
        BuiltinRule::Max => format!("{field} must not exceed {param}."),
        BuiltinRule::Email => format!("{field} must be a valid email."),
        BuiltinRule::Boolean => format!("{field} must be a boolean value."),
        BuiltinRule::Url => format!("{field} must be a valid URL."),
        BuiltinRule::Alpha => format!("{field} must contain only alphabetic characters."),
        BuiltinRule::AlphaDash => format!(
            "{field} must contain only alphanumeric characters, dashes, and underscores."
        ),
        BuiltinRule::Numeric => format!("{field} must be numeric."),
        BuiltinRule::Equal => format!("{field} must be equal to {param}."),
        BuiltinRule::In => format!("{field} must be one of the following values: {param}."),
        BuiltinRule::NotIn => format!("{field} must not be one of the following values: {param}."),
        BuiltinRule::Date => format!("{field} must be a valid date."),
    }
}

/// Fallback for failed custom rules with no override configured.
pub(crate) fn custom_fallback(field: &str) -> String {
    format!("{field} validation failed.")
}

/// Per-field report for an unrecognized rule name.
pub(crate) fn invalid_rule(name: &str) -> String {
    format!("Invalid rule: {name}.")
}
