//! The validator: configuration, the evaluation loop, and introspection.

use std::collections::{BTreeMap, HashMap};

use formguard_model::{ConfigError, Result, ValidationErrors};
use serde_json::{Map, Value};
use tracing::debug;

use crate::checks::{self, Outcome};
use crate::messages::{self, MessageTable};
use crate::path;
use crate::rules::{self, BuiltinRule};
use crate::sanitize;

/// Custom rule predicate: receives the resolved value (null for a missing
/// field) and the raw rule parameter.
type CustomRule = Box<dyn Fn(&Value, Option<&str>) -> bool + Send + Sync>;

/// Sentinel handed to custom predicates when the field does not resolve.
static MISSING: Value = Value::Null;

/// Declarative validator over a JSON-shaped input map.
///
/// Construct with the input, configure rules/messages/customs/defaults,
/// then run [`validate`](Self::validate) and inspect
/// [`errors`](Self::errors) or take a [`sanitized`](Self::sanitized) copy.
/// Every configuration call before `validate` takes effect; a fresh error
/// set is built on every run, so reconfigure-and-revalidate works.
pub struct Validator {
    data: Map<String, Value>,
    rules: BTreeMap<String, String>,
    messages: MessageTable,
    custom: HashMap<String, CustomRule>,
    errors: ValidationErrors,
}

impl Validator {
    /// Create a validator owning the given input map.
    pub fn new(data: Map<String, Value>) -> Self {
        Self {
            data,
            rules: BTreeMap::new(),
            messages: MessageTable::default(),
            custom: HashMap::new(),
            errors: ValidationErrors::new(),
        }
    }

    /// Create a validator from any JSON value; fails fast unless it is an
    /// object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::new(map)),
            _ => Err(ConfigError::NotAnObject),
        }
    }

    /// Replace the rule table wholesale. Keys are field paths (dots reach
    /// into nested objects); values are rule strings such as
    /// `"required|string|min:3"`.
    pub fn set_rules<I, K, V>(&mut self, rules: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.rules = rules
            .into_iter()
            .map(|(field, spec)| (field.into(), spec.into()))
            .collect();
    }

    /// Replace the message override table wholesale. Keys take the
    /// `"field.rule"` form; an undotted key is malformed configuration.
    pub fn set_messages<I, K, V>(&mut self, messages: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.messages = MessageTable::from_flat(messages)?;
        Ok(())
    }

    /// Register (or overwrite) a custom rule. A custom rule fully shadows a
    /// built-in of the same name. The name must be non-empty and free of
    /// the grammar separators `|` and `:`.
    pub fn add_custom_rule<F>(&mut self, name: impl Into<String>, predicate: F) -> Result<()>
    where
        F: Fn(&Value, Option<&str>) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        if name.is_empty() || name.contains(['|', ':']) {
            return Err(ConfigError::InvalidRuleName { name });
        }
        self.custom.insert(name, Box::new(predicate));
        Ok(())
    }

    /// Inject defaults for absent top-level keys, immediately. Keys already
    /// present are left alone; nested dot-paths are not interpreted.
    pub fn set_defaults<I, K>(&mut self, defaults: I)
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        for (key, value) in defaults {
            let key = key.into();
            if !self.data.contains_key(&key) {
                self.data.insert(key, value);
            }
        }
    }

    /// Run every rule of every field, rebuilding the error set. Returns
    /// true iff no rule failed. Evaluation never short-circuits: a field
    /// collects one message per failed rule, in declaration order, and
    /// later fields are always evaluated.
    pub fn validate(&mut self) -> bool {
        debug!(fields = self.rules.len(), "running validation");
        let mut errors = ValidationErrors::new();

        for (field, spec) in &self.rules {
            let value = path::resolve(field, &self.data);
            for invocation in rules::parse_spec(spec) {
                let param = invocation.param.as_deref();

                if let Some(predicate) = self.custom.get(&invocation.name) {
                    if !predicate(value.unwrap_or(&MISSING), param) {
                        let message = self
                            .messages
                            .get(field, &invocation.name)
                            .map_or_else(|| messages::custom_fallback(field), str::to_string);
                        errors.add(field, message);
                    }
                    continue;
                }

                let Some(rule) = BuiltinRule::from_name(&invocation.name) else {
                    errors.add(field, messages::invalid_rule(&invocation.name));
                    continue;
                };

                let outcome = checks::evaluate(rule, value, param, &self.data);
                if outcome != Outcome::Pass {
                    let message = self.messages.get(field, rule.name()).map_or_else(
                        || messages::default_message(rule, field, param, outcome),
                        str::to_string,
                    );
                    errors.add(field, message);
                }
            }
        }

        if !errors.is_empty() {
            debug!(
                fields = errors.field_count(),
                messages = errors.message_count(),
                "validation failed"
            );
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Errors accumulated by the most recent [`validate`](Self::validate)
    /// run; empty before the first run.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Sanitized copy of the input: top-level strings trimmed and
    /// HTML-escaped, everything else cloned through. The stored input is
    /// untouched.
    pub fn sanitized(&self) -> Map<String, Value> {
        sanitize::sanitize(&self.data)
    }

    /// Read-only view of the stored input, defaults included once
    /// [`set_defaults`](Self::set_defaults) has run.
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn validator(value: Value) -> Validator {
        Validator::from_value(value).expect("object input")
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert_eq!(
            Validator::from_value(json!([1, 2])).err(),
            Some(ConfigError::NotAnObject)
        );
        assert_eq!(
            Validator::from_value(json!("x")).err(),
            Some(ConfigError::NotAnObject)
        );
    }

    #[test]
    fn no_rules_means_valid() {
        let mut v = validator(json!({ "anything": null }));
        assert!(v.validate());
        assert!(v.errors().is_empty());
    }

    #[test]
    fn custom_rule_names_are_checked_at_registration() {
        let mut v = validator(json!({}));
        let err = v.add_custom_rule("", |_, _| true).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidRuleName {
                name: String::new()
            }
        );
        assert!(v.add_custom_rule("has|pipe", |_, _| true).is_err());
        assert!(v.add_custom_rule("has:colon", |_, _| true).is_err());
        assert!(v.add_custom_rule("even", |_, _| true).is_ok());
    }

    #[test]
    fn unknown_rules_report_per_field_without_aborting() {
        let mut v = validator(json!({ "name": "x", "age": 20 }));
        v.set_rules([("name", "required|bogus"), ("age", "integer")]);
        assert!(!v.validate());
        assert_eq!(v.errors().messages("name"), &["Invalid rule: bogus."]);
        assert!(v.errors().messages("age").is_empty());
    }

    #[test]
    fn rules_accumulate_multiple_failures_in_declaration_order() {
        let mut v = validator(json!({ "code": true }));
        v.set_rules([("code", "string|alpha|min:3")]);
        assert!(!v.validate());
        // string and alpha both fail; min skips booleans.
        assert_eq!(
            v.errors().messages("code"),
            &[
                "code must be a string.",
                "code must contain only alphabetic characters.",
            ]
        );
    }

    #[test]
    fn defaults_fill_only_absent_top_level_keys() {
        let mut v = validator(json!({ "present": "kept" }));
        v.set_defaults([
            ("present".to_string(), json!("overwritten")),
            ("country".to_string(), json!("USA")),
            // Dotted keys land literally at the top level, never nested.
            ("a.b".to_string(), json!(1)),
        ]);
        assert_eq!(v.data()["present"], json!("kept"));
        assert_eq!(v.data()["country"], json!("USA"));
        assert_eq!(v.data()["a.b"], json!(1));
        assert!(!v.data().contains_key("a"));
    }

    #[test]
    fn message_override_beats_default_template() {
        let mut v = validator(json!({ "age": "17" }));
        v.set_rules([("age", "min:18")]);
        v.set_messages([("age.min", "Must be an adult.")])
            .expect("well-formed key");
        assert!(!v.validate());
        assert_eq!(v.errors().messages("age"), &["Must be an adult."]);
    }

    #[test]
    fn reconfiguring_rules_rebuilds_errors_from_scratch() {
        let mut v = validator(json!({ "age": "17" }));
        v.set_rules([("age", "min:18")]);
        assert!(!v.validate());
        assert_eq!(v.errors().message_count(), 1);

        v.set_rules([("age", "numeric")]);
        assert!(v.validate());
        assert!(v.errors().is_empty());
    }
}
