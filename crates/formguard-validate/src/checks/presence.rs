//! Presence check: the `required` rule.

use formguard_model::value::value_to_string;
use serde_json::Value;

/// A field is present when it resolves, is not null, and its string
/// rendering is non-blank after trimming.
pub(crate) fn required(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(value) => !value_to_string(value).trim().is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_null_and_blank_fail() {
        assert!(!required(None));
        assert!(!required(Some(&Value::Null)));
        assert!(!required(Some(&json!(""))));
        assert!(!required(Some(&json!("   "))));
    }

    #[test]
    fn any_non_blank_rendering_passes() {
        assert!(required(Some(&json!("x"))));
        assert!(required(Some(&json!(0))));
        assert!(required(Some(&json!(false))));
        assert!(required(Some(&json!([]))));
    }
}
