//! Condition parser.
//!
//! Groups where-clause tokens into `field operator value` triples joined by
//! `AND`:
//!
//! ```text
//!            field          NOT (once)
//!   ┌──────────────────┐   ┌───────┐
//!   │                  ▼   │       ▼
//! Field ──────────► Operator ───► Value ──► (emit) ──► Field
//!   ▲ AND                                               │
//!   └───────────────────────────────────────────────────┘
//! ```
//!
//! `AND` is accepted only between complete conditions. Parsing is purely
//! syntactic; field names are resolved afterwards by [`resolve_conditions`].

use tracing::debug;

use super::condition::{is_known_operator, ConditionDescriptor, ConditionValue};
use super::error::ParseErrorKind;
use super::lexer::ConditionToken;
use super::resolver::FieldResolver;

/// A parsed, unresolved condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCondition {
    pub field: String,
    pub operator: String,
    pub value: String,
}

#[derive(Debug)]
enum Slot {
    Field,
    Operator { field: String, negated: bool },
    Value { field: String, operator: String },
}

/// Group tokens into conditions.
pub fn parse_conditions(tokens: &[ConditionToken]) -> Result<Vec<RawCondition>, ParseErrorKind> {
    let mut conditions = Vec::new();
    let mut slot = Slot::Field;

    for token in tokens {
        if token.is_keyword("where") {
            return Err(ParseErrorKind::MultipleWhere {
                token: token.text.clone(),
            });
        }

        if token.is_keyword("and") {
            if !matches!(slot, Slot::Field) {
                return Err(ParseErrorKind::AndAfterIncompleteCondition {
                    token: token.text.clone(),
                });
            }
            continue;
        }

        let text = token.text.trim();
        slot = match slot {
            Slot::Field => Slot::Operator {
                field: text.to_string(),
                negated: false,
            },
            Slot::Operator { field, negated } => {
                if text.eq_ignore_ascii_case("NOT") {
                    if negated {
                        return Err(ParseErrorKind::MultipleNot {
                            token: token.text.clone(),
                        });
                    }
                    Slot::Operator {
                        field,
                        negated: true,
                    }
                } else {
                    let operator = if negated {
                        format!("NOT {text}")
                    } else {
                        text.to_string()
                    };
                    if !is_known_operator(&operator) {
                        return Err(ParseErrorKind::UnknownOperator { operator });
                    }
                    Slot::Value { field, operator }
                }
            }
            Slot::Value { field, operator } => {
                if field.is_empty() || operator.is_empty() || text.is_empty() {
                    return Err(ParseErrorKind::MalformedCondition {
                        token: token.text.clone(),
                    });
                }
                let condition = RawCondition {
                    field,
                    operator,
                    value: text.to_string(),
                };
                debug!(?condition, "parsed condition");
                conditions.push(condition);
                Slot::Field
            }
        };
    }

    match slot {
        Slot::Field => Ok(conditions),
        _ => Err(ParseErrorKind::IncompleteCondition),
    }
}

/// Resolve each condition's field, in order.
pub fn resolve_conditions(
    conditions: Vec<RawCondition>,
    resolver: &FieldResolver<'_>,
) -> Result<Vec<ConditionDescriptor>, ParseErrorKind> {
    conditions
        .into_iter()
        .enumerate()
        .map(|(position, raw)| {
            let field = resolver.resolve_condition_field(&raw.field, position)?;
            Ok(ConditionDescriptor::new(
                field.name,
                field.source,
                field.code,
                raw.operator,
                ConditionValue::Scalar(raw.value),
            ))
        })
        .collect()
}
