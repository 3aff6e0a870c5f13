//! Built-in rule evaluators, one module per check category.
//!
//! Every evaluator receives the resolved field value as `Option<&Value>`
//! (`None` is the missing sentinel) and reports an [`Outcome`]. No
//! evaluator mutates anything or short-circuits its siblings.

mod bounds;
mod compare;
mod format;
mod presence;
mod types;

use serde_json::{Map, Value};

use crate::rules::BuiltinRule;

/// Result of evaluating one rule against one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Pass,
    Fail,
    /// min/max failed on the string-length branch; the message appends
    /// " characters".
    FailLength,
}

impl Outcome {
    fn passing(pass: bool) -> Self {
        if pass { Self::Pass } else { Self::Fail }
    }
}

/// Evaluate a built-in rule. `data` is the full input map, needed only by
/// `equal` to resolve its comparison field.
pub(crate) fn evaluate(
    rule: BuiltinRule,
    value: Option<&Value>,
    param: Option<&str>,
    data: &Map<String, Value>,
) -> Outcome {
    match rule {
        BuiltinRule::Required => Outcome::passing(presence::required(value)),
        BuiltinRule::StringType => Outcome::passing(types::is_string(value)),
        BuiltinRule::Integer => Outcome::passing(types::is_integer(value)),
        BuiltinRule::Boolean => Outcome::passing(types::is_boolean(value)),
        BuiltinRule::Numeric => Outcome::passing(types::is_numeric(value)),
        BuiltinRule::Min => bounds::min(value, param),
        BuiltinRule::Max => bounds::max(value, param),
        BuiltinRule::Email => Outcome::passing(format::is_email(value)),
        BuiltinRule::Url => Outcome::passing(format::is_url(value)),
        BuiltinRule::Alpha => Outcome::passing(format::is_alpha(value)),
        BuiltinRule::AlphaDash => Outcome::passing(format::is_alpha_dash(value)),
        BuiltinRule::Date => Outcome::passing(format::is_date(value)),
        BuiltinRule::Equal => Outcome::passing(compare::equal(value, param, data)),
        BuiltinRule::In => Outcome::passing(compare::one_of(value, param)),
        BuiltinRule::NotIn => Outcome::passing(!compare::one_of(value, param)),
    }
}
