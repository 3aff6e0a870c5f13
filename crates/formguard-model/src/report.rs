//! Accumulated validation errors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-field error messages collected during a validation run.
///
/// Fields iterate in lexicographic order; messages within a field keep the
/// order in which their rules were declared. One field may carry any number
/// of messages, one per failed rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    #[serde(flatten)]
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a field. Never replaces prior messages.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// True when no field has any message.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields with at least one message.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Total number of messages across all fields.
    pub fn message_count(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    /// All messages for a field, empty if the field has none.
    pub fn messages(&self, field: &str) -> &[String] {
        self.fields.get(field).map_or(&[], Vec::as_slice)
    }

    /// First message for a field, if any.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// Iterate over `(field, messages)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }
}
