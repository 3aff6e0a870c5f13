//! Loose coercion helpers over [`serde_json::Value`].
//!
//! The rule grammar deliberately treats values loosely: `required` and the
//! character-class rules inspect a string rendering of any value, and the
//! numeric rules accept numeric strings. These helpers centralize that
//! coercion so every check reads the same way.

use serde_json::Value;

/// Render a value as the string the loose rules compare against.
///
/// Null renders empty (so a null field reads as "blank"), scalars render
/// their literal form, and composites render as compact JSON.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        composite => composite.to_string(),
    }
}

/// Numeric interpretation of a value: a JSON number, or a string whose
/// trimmed form parses as one. `None` for everything else.
pub fn as_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Whether a value is an integer: an integral JSON number, or a string
/// whose trimmed form is an optionally signed integer literal.
pub fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(number) => number.is_i64() || number.is_u64(),
        Value::String(text) => {
            let trimmed = text.trim();
            trimmed.parse::<i64>().is_ok() || trimmed.parse::<u64>().is_ok()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn scalars_render_literally() {
        assert_eq!(value_to_string(&json!(null)), "");
        assert_eq!(value_to_string(&json!("  hi ")), "  hi ");
        assert_eq!(value_to_string(&json!(42)), "42");
        assert_eq!(value_to_string(&json!(true)), "true");
    }

    #[test]
    fn composites_render_as_json() {
        assert_eq!(value_to_string(&json!([1, 2])), "[1,2]");
        assert_eq!(value_to_string(&json!({"a": 1})), "{\"a\":1}");
    }

    #[test]
    fn numeric_interpretation() {
        assert_eq!(as_numeric(&json!(17)), Some(17.0));
        assert_eq!(as_numeric(&json!("17")), Some(17.0));
        assert_eq!(as_numeric(&json!(" 17.5 ")), Some(17.5));
        assert_eq!(as_numeric(&json!("17a")), None);
        assert_eq!(as_numeric(&json!(true)), None);
        assert_eq!(as_numeric(&json!([17])), None);
    }

    #[test]
    fn integer_interpretation() {
        assert!(is_integer(&json!(5)));
        assert!(is_integer(&json!(-5)));
        assert!(is_integer(&json!("  +5 ")));
        assert!(is_integer(&json!("18446744073709551615")));
        assert!(!is_integer(&json!(5.5)));
        assert!(!is_integer(&json!("5.0")));
        assert!(!is_integer(&json!(null)));
    }
}
