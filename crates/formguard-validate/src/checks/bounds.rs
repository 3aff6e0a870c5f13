//! Bound checks: `min` and `max`.
//!
//! Numbers and numeric strings compare numerically; other strings compare
//! by character count. Values that are neither numeric nor string (bool,
//! null, list, map, or a missing field) are skipped outright — a permissive
//! gap carried over from the original engine and pinned by tests.

use formguard_model::value::as_numeric;
use serde_json::Value;

use super::Outcome;

pub(crate) fn min(value: Option<&Value>, param: Option<&str>) -> Outcome {
    check(value, limit(param), |actual, limit| actual >= limit)
}

pub(crate) fn max(value: Option<&Value>, param: Option<&str>) -> Outcome {
    check(value, limit(param), |actual, limit| actual <= limit)
}

/// The raw parameter cast loosely to a number; absent or unparseable
/// parameters read as 0.
fn limit(param: Option<&str>) -> f64 {
    param
        .and_then(|param| param.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

fn check(value: Option<&Value>, limit: f64, within: impl Fn(f64, f64) -> bool) -> Outcome {
    let Some(value) = value else {
        return Outcome::Pass;
    };
    if let Some(actual) = as_numeric(value) {
        return if within(actual, limit) {
            Outcome::Pass
        } else {
            Outcome::Fail
        };
    }
    if let Value::String(text) = value {
        return if within(text.chars().count() as f64, limit) {
            Outcome::Pass
        } else {
            Outcome::FailLength
        };
    }
    Outcome::Pass
}
