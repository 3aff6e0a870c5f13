//! Runtime-type checks: `string`, `integer`, `boolean`, `numeric`.

use formguard_model::value;
use serde_json::Value;

pub(crate) fn is_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(_)))
}

pub(crate) fn is_boolean(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(_)))
}

pub(crate) fn is_integer(value: Option<&Value>) -> bool {
    value.is_some_and(value::is_integer)
}

pub(crate) fn is_numeric(value: Option<&Value>) -> bool {
    value.is_some_and(|value| value::as_numeric(value).is_some())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn string_and_boolean_match_on_variant_only() {
        assert!(is_string(Some(&json!("17"))));
        assert!(!is_string(Some(&json!(17))));
        assert!(!is_string(None));

        assert!(is_boolean(Some(&json!(true))));
        assert!(!is_boolean(Some(&json!("true"))));
        assert!(!is_boolean(Some(&json!(1))));
    }

    #[test]
    fn integer_accepts_integral_numbers_and_literals() {
        assert!(is_integer(Some(&json!(42))));
        assert!(is_integer(Some(&json!(" -3 "))));
        assert!(!is_integer(Some(&json!(4.2))));
        assert!(!is_integer(Some(&json!("4.2"))));
        assert!(!is_integer(None));
    }

    #[test]
    fn numeric_accepts_numbers_and_numeric_strings() {
        assert!(is_numeric(Some(&json!(4.2))));
        assert!(is_numeric(Some(&json!("17"))));
        assert!(is_numeric(Some(&json!(" 17.5 "))));
        assert!(!is_numeric(Some(&json!("17a"))));
        assert!(!is_numeric(Some(&json!(true))));
        assert!(!is_numeric(None));
    }
}
