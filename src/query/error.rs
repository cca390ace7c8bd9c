//! Errors raised while translating or building a query.

use thiserror::Error;

use crate::catalog::FieldCode;

/// Result type for text query translation.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;

/// A text query could not be translated.
///
/// Carries the query text as supplied, so the message can be shown to a user
/// without further context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} in query: {query}")]
pub struct ParseError {
    pub query: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(query: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            query: query.into(),
            kind,
        }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

/// What went wrong while translating a text query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("query is empty")]
    EmptyQuery,

    #[error("results desired must be greater than zero")]
    InvalidResultCount,

    #[error("query must begin with SELECT")]
    MissingSelect,

    #[error("no select fields found")]
    NoSelects,

    /// DISTINCT / NON-DISTINCT anywhere but straight after SELECT.
    #[error("{token} must directly follow SELECT (found at select position {position})")]
    MisplacedDistinct { token: String, position: usize },

    /// Unmatched or misplaced parentheses around an aggregated field.
    #[error("malformed select field {field}")]
    MalformedSelect { field: String },

    #[error("aggregation with no field name in select field {field}")]
    EmptyAggregate { field: String },

    #[error("unknown aggregation function {function} in select field {field}")]
    UnknownAggregation { function: String, field: String },

    #[error("untranslatable select field {field} in position {position}")]
    UntranslatableSelect { field: String, position: usize },

    /// A quote opened after unquoted text; `offset` is a byte offset into the query.
    #[error("invalid quote at character {offset}")]
    InvalidQuote { offset: usize },

    #[error("unclosed quoted literal in where clause")]
    UnterminatedLiteral,

    #[error("multiple where clauses (found {token:?})")]
    MultipleWhere { token: String },

    #[error("AND after incomplete condition (found {token:?})")]
    AndAfterIncompleteCondition { token: String },

    #[error("multiple NOT in condition (found {token:?})")]
    MultipleNot { token: String },

    #[error("unknown condition operator {operator:?}")]
    UnknownOperator { operator: String },

    #[error("malformed condition near {token:?}")]
    MalformedCondition { token: String },

    #[error("incomplete last condition")]
    IncompleteCondition,

    #[error("untranslatable condition field {field} in position {position}")]
    UntranslatableCondition { field: String, position: usize },

    /// A resolved field without a wire code reached the final review pass.
    #[error("field {field} has no numeric translation")]
    Untranslated { field: String },
}

/// Misuse of [`QueryBuilder`](super::QueryBuilder).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    #[error("duplicate select field {field} (code {code})")]
    DuplicateSelect { field: String, code: FieldCode },

    #[error("query has no select fields")]
    NoSelects,

    #[error("order by field {field} is not represented in the select statements")]
    OrderByNotSelected { field: String },

    #[error("ascending or descending order by must be specified for {field}")]
    MissingDirection { field: String },

    #[error("multi-value condition on {field} needs at least one value")]
    EmptyValueList { field: String },

    #[error("operator {operator} is not supported for multi-value conditions")]
    UnsupportedOperator { operator: String },

    #[error("results desired must be greater than zero")]
    InvalidResultCount,
}
