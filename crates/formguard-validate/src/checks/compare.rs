//! Comparison checks: `equal`, `in`, `not_in`.

use formguard_model::value::value_to_string;
use serde_json::{Map, Value};

use crate::path;

/// Strict equality (same variant, same content) against the value resolved
/// at the parameter path. Two missing fields compare equal.
pub(crate) fn equal(
    value: Option<&Value>,
    param: Option<&str>,
    data: &Map<String, Value>,
) -> bool {
    let other = param.and_then(|other_path| path::resolve(other_path, data));
    value == other
}

/// String-compared membership in the comma-split parameter list. Items are
/// not trimmed; a missing value renders empty.
pub(crate) fn one_of(value: Option<&Value>, param: Option<&str>) -> bool {
    let Some(list) = param else {
        return false;
    };
    let rendered = value.map(value_to_string).unwrap_or_default();
    list.split(',').any(|item| item == rendered)
}
