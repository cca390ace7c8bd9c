//! The translated query shared by both front ends.

use std::sync::Arc;

use serde::Serialize;

use super::condition::ConditionDescriptor;
use super::field::{FieldDescriptor, OrderByDescriptor};

/// How a [`TranslatedQuery`] was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryOrigin {
    /// Parsed from query text, kept verbatim.
    Text(String),
    /// Assembled by a [`QueryBuilder`](super::QueryBuilder).
    Builder,
}

/// A validated query ready for the wire.
///
/// Immutable: executors share one instance across every page request for the
/// same logical query. There is always at least one select and the desired
/// result count is positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslatedQuery {
    selects: Vec<FieldDescriptor>,
    conditions: Vec<ConditionDescriptor>,
    order_by: Vec<OrderByDescriptor>,
    distinct: bool,
    case_insensitive: bool,
    compute_total_row_count: bool,
    results_desired: u32,
    origin: QueryOrigin,
    #[serde(skip)]
    column_names: Arc<[String]>,
}

/// Everything needed to freeze a query. Only the translator and builder
/// construct these, after validating them.
pub(crate) struct QueryParts {
    pub selects: Vec<FieldDescriptor>,
    pub conditions: Vec<ConditionDescriptor>,
    pub order_by: Vec<OrderByDescriptor>,
    pub distinct: bool,
    pub case_insensitive: bool,
    pub compute_total_row_count: bool,
    pub results_desired: u32,
    pub origin: QueryOrigin,
}

impl TranslatedQuery {
    pub(crate) fn from_parts(parts: QueryParts) -> Self {
        let column_names = parts
            .selects
            .iter()
            .map(|field| field.column_name().to_string())
            .collect();

        Self {
            selects: parts.selects,
            conditions: parts.conditions,
            order_by: parts.order_by,
            distinct: parts.distinct,
            case_insensitive: parts.case_insensitive,
            compute_total_row_count: parts.compute_total_row_count,
            results_desired: parts.results_desired,
            origin: parts.origin,
            column_names,
        }
    }

    pub fn selects(&self) -> &[FieldDescriptor] {
        &self.selects
    }

    pub fn conditions(&self) -> &[ConditionDescriptor] {
        &self.conditions
    }

    pub fn order_by(&self) -> &[OrderByDescriptor] {
        &self.order_by
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    /// Whether the catalog should compare where-clause values case-insensitively.
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn compute_total_row_count(&self) -> bool {
        self.compute_total_row_count
    }

    /// Rows requested per page.
    pub fn results_desired(&self) -> u32 {
        self.results_desired
    }

    pub fn origin(&self) -> &QueryOrigin {
        &self.origin
    }

    /// The original query text, for text queries.
    pub fn query_text(&self) -> Option<&str> {
        match &self.origin {
            QueryOrigin::Text(text) => Some(text),
            QueryOrigin::Builder => None,
        }
    }

    /// Column names in select order, shared with every result row.
    pub fn column_names(&self) -> &Arc<[String]> {
        &self.column_names
    }
}
