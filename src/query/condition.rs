//! Where-clause conditions and the operator allow-list.

use std::fmt;

use serde::Serialize;

use super::field::FieldSource;
use crate::catalog::FieldCode;

/// Operator spellings accepted in a text query's where clause.
///
/// Matching is ASCII case-insensitive. A parsed `NOT` is folded into the
/// operator text (`NOT like`) before this check, so only the two-word
/// spellings listed here survive negation.
pub const OPERATORS: &[&str] = &[
    "=",
    "<>",
    "<",
    ">",
    "<=",
    ">=",
    "in",
    "not in",
    "between",
    "not between",
    "like",
    "not like",
    "sounds like",
    "sounds not like",
    "TABLE",
    "num<",
    "num>",
    "num<=",
    "num>=",
];

pub fn is_known_operator(operator: &str) -> bool {
    OPERATORS.iter().any(|op| op.eq_ignore_ascii_case(operator))
}

// ============================================================================
// Operators
// ============================================================================

/// Typed condition operator for the query builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOperator {
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    In,
    NotIn,
    Between,
    NotBetween,
    Like,
    NotLike,
    SoundsLike,
    SoundsNotLike,
    Table,
    NumLessThan,
    NumGreaterThan,
    NumLessThanOrEqual,
    NumGreaterThanOrEqual,
}

impl ConditionOperator {
    pub const ALL: [ConditionOperator; 19] = [
        Self::Equal,
        Self::NotEqual,
        Self::LessThan,
        Self::GreaterThan,
        Self::LessThanOrEqual,
        Self::GreaterThanOrEqual,
        Self::In,
        Self::NotIn,
        Self::Between,
        Self::NotBetween,
        Self::Like,
        Self::NotLike,
        Self::SoundsLike,
        Self::SoundsNotLike,
        Self::Table,
        Self::NumLessThan,
        Self::NumGreaterThan,
        Self::NumLessThanOrEqual,
        Self::NumGreaterThanOrEqual,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "<>",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThanOrEqual => ">=",
            Self::In => "in",
            Self::NotIn => "not in",
            Self::Between => "between",
            Self::NotBetween => "not between",
            Self::Like => "like",
            Self::NotLike => "not like",
            Self::SoundsLike => "sounds like",
            Self::SoundsNotLike => "sounds not like",
            Self::Table => "TABLE",
            Self::NumLessThan => "num<",
            Self::NumGreaterThan => "num>",
            Self::NumLessThanOrEqual => "num<=",
            Self::NumGreaterThanOrEqual => "num>=",
        }
    }

    /// Parse an operator spelling, ignoring ASCII case.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(s))
    }

    /// Operators taking a list of values rather than a scalar.
    pub fn is_multi_value(self) -> bool {
        matches!(
            self,
            Self::In | Self::NotIn | Self::Between | Self::NotBetween
        )
    }
}

impl fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Values
// ============================================================================

/// A condition's right-hand side.
///
/// Scalars are stored exactly as they will be sent, quotes included. List
/// members are stored as supplied; callers quote them if the catalog needs it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Scalar(String),
    List(Vec<String>),
}

impl ConditionValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Scalar(_) => None,
            Self::List(values) => Some(values),
        }
    }
}

// ============================================================================
// Descriptors
// ============================================================================

/// A resolved `field operator value` triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ConditionDescriptor {
    field_name: String,
    source: FieldSource,
    code: FieldCode,
    operator: String,
    value: ConditionValue,
}

impl ConditionDescriptor {
    pub fn new(
        field_name: impl Into<String>,
        source: FieldSource,
        code: FieldCode,
        operator: impl Into<String>,
        value: ConditionValue,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            source,
            code,
            operator: operator.into(),
            value,
        }
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn source(&self) -> FieldSource {
        self.source
    }

    pub fn code(&self) -> FieldCode {
        self.code
    }

    /// Operator text, possibly carrying a leading `NOT `.
    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn value(&self) -> &ConditionValue {
        &self.value
    }

    /// The value as rendered into the wire condition clause.
    ///
    /// `in`/`not in` lists render as `(a,b)`, `between`/`not between` lists as
    /// `a b`. Any other list joins with a comma.
    pub fn rendered_value(&self) -> String {
        match &self.value {
            ConditionValue::Scalar(s) => s.clone(),
            ConditionValue::List(values) => {
                let op = self.operator.to_ascii_lowercase();
                if op.ends_with("between") {
                    values.join(" ")
                } else if op.ends_with("in") {
                    format!("({})", values.join(","))
                } else {
                    values.join(",")
                }
            }
        }
    }

    /// Wire clause: `" <operator> <value> "`.
    pub fn clause(&self) -> String {
        format!(" {} {} ", self.operator, self.rendered_value())
    }
}

impl fmt::Display for ConditionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.field_name, self.clause().trim_end())
    }
}
