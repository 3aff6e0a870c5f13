//! Rule grammar: parsing rule strings into ordered invocations.
//!
//! The grammar is fixed and small: rules join with `|`, and a rule takes at
//! most one parameter after the first `:` of its token. Everything after
//! that first colon belongs to the parameter, so `equal:emails.email` and
//! `in:a,b,c` parse as expected.

/// One parsed rule application: a name and an optional parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleInvocation {
    pub name: String,
    pub param: Option<String>,
}

/// Parse a rule string into its invocations, preserving declaration order.
pub fn parse_spec(spec: &str) -> Vec<RuleInvocation> {
    spec.split('|')
        .map(|token| match token.split_once(':') {
            Some((name, param)) => RuleInvocation {
                name: name.to_string(),
                param: Some(param.to_string()),
            },
            None => RuleInvocation {
                name: token.to_string(),
                param: None,
            },
        })
        .collect()
}

/// The closed set of built-in rules.
///
/// Custom rules registered on a validator shadow these by name; an
/// unrecognized name is reported as a per-field `Invalid rule` error at
/// validation time, never as a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinRule {
    Required,
    StringType,
    Integer,
    Min,
    Max,
    Email,
    Boolean,
    Url,
    Alpha,
    AlphaDash,
    Numeric,
    Equal,
    In,
    NotIn,
    Date,
}

impl BuiltinRule {
    /// Resolve a rule name, `None` for unrecognized names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "required" => Some(Self::Required),
            "string" => Some(Self::StringType),
            "integer" => Some(Self::Integer),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            "email" => Some(Self::Email),
            "boolean" => Some(Self::Boolean),
            "url" => Some(Self::Url),
            "alpha" => Some(Self::Alpha),
            "alpha_dash" => Some(Self::AlphaDash),
            "numeric" => Some(Self::Numeric),
            "equal" => Some(Self::Equal),
            "in" => Some(Self::In),
            "not_in" => Some(Self::NotIn),
            "date" => Some(Self::Date),
            _ => None,
        }
    }

    /// The grammar-level name, used for message override lookups.
    pub fn name(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::StringType => "string",
            Self::Integer => "integer",
            Self::Min => "min",
            Self::Max => "max",
            Self::Email => "email",
            Self::Boolean => "boolean",
            Self::Url => "url",
            Self::Alpha => "alpha",
            Self::AlphaDash => "alpha_dash",
            Self::Numeric => "numeric",
            Self::Equal => "equal",
            Self::In => "in",
            Self::NotIn => "not_in",
            Self::Date => "date",
        }
    }
}
