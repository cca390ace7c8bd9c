//! Programmatic query construction.
//!
//! # Example
//!
//! ```ignore
//! use genquery::catalog::columns;
//! use genquery::query::{ConditionOperator, QueryBuilder, SortDir};
//!
//! let mut builder = QueryBuilder::new(true);
//! builder
//!     .add_select(&columns::COLL_NAME)?
//!     .add_select(&columns::DATA_NAME)?
//!     .add_condition(&columns::COLL_NAME, ConditionOperator::Like, "/tempZone/home/%")?
//!     .add_order_by(&columns::DATA_NAME, SortDir::Asc)?;
//! let query = builder.export(500)?;
//! ```

use std::fmt::Display;

use tracing::debug;

use super::condition::{ConditionDescriptor, ConditionOperator, ConditionValue};
use super::error::{BuilderError, BuilderResult};
use super::field::{Aggregation, FieldDescriptor, FieldSource, OrderByDescriptor, SortDir};
use super::translated::{QueryOrigin, QueryParts, TranslatedQuery};
use crate::catalog::CatalogField;

/// Accumulates selects, conditions and order-by entries for one query.
///
/// Each `add_*` call validates immediately. [`export`](Self::export) freezes
/// the current state into a [`TranslatedQuery`]; the builder stays usable and
/// later changes do not affect earlier exports.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    selects: Vec<FieldDescriptor>,
    conditions: Vec<ConditionDescriptor>,
    order_by: Vec<OrderByDescriptor>,
    distinct: bool,
    case_insensitive: bool,
    compute_total_row_count: bool,
}

impl QueryBuilder {
    pub fn new(distinct: bool) -> Self {
        Self {
            distinct,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    #[must_use]
    pub fn compute_total_row_count(mut self, enabled: bool) -> Self {
        self.compute_total_row_count = enabled;
        self
    }

    pub fn add_select(&mut self, field: &CatalogField) -> BuilderResult<&mut Self> {
        self.add_select_aggregate(field, Aggregation::Field)
    }

    /// Select `field` wrapped in an aggregate function.
    pub fn add_select_aggregate(
        &mut self,
        field: &CatalogField,
        aggregation: Aggregation,
    ) -> BuilderResult<&mut Self> {
        if self.is_selected(field) {
            return Err(BuilderError::DuplicateSelect {
                field: field.name().to_string(),
                code: field.code(),
            });
        }
        self.selects
            .push(FieldDescriptor::from_catalog(field, aggregation));
        Ok(self)
    }

    /// Add a scalar condition.
    ///
    /// The value is wrapped in single quotes, except for `in` where the caller
    /// supplies the list text (`('a','b')`) already formatted.
    pub fn add_condition(
        &mut self,
        field: &CatalogField,
        operator: ConditionOperator,
        value: impl Display,
    ) -> BuilderResult<&mut Self> {
        let value = match operator {
            ConditionOperator::In => value.to_string(),
            _ => format!("'{value}'"),
        };
        self.push_condition(field, operator, ConditionValue::Scalar(value));
        Ok(self)
    }

    /// Add an `in`, `not in`, `between` or `not between` condition.
    ///
    /// List members are sent as given, so string members must carry their own
    /// quotes.
    pub fn add_multi_value_condition<I, S>(
        &mut self,
        field: &CatalogField,
        operator: ConditionOperator,
        values: I,
    ) -> BuilderResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !operator.is_multi_value() {
            return Err(BuilderError::UnsupportedOperator {
                operator: operator.to_string(),
            });
        }

        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(BuilderError::EmptyValueList {
                field: field.name().to_string(),
            });
        }

        self.push_condition(field, operator, ConditionValue::List(values));
        Ok(self)
    }

    /// Order by a field that is already selected.
    ///
    /// `None` for the direction is rejected.
    pub fn add_order_by(
        &mut self,
        field: &CatalogField,
        dir: impl Into<Option<SortDir>>,
    ) -> BuilderResult<&mut Self> {
        let Some(dir) = dir.into() else {
            return Err(BuilderError::MissingDirection {
                field: field.name().to_string(),
            });
        };

        let Some(selected) = self.selects.iter().find(|s| s.code() == field.code()) else {
            return Err(BuilderError::OrderByNotSelected {
                field: field.name().to_string(),
            });
        };

        self.order_by
            .push(OrderByDescriptor::new(selected.clone(), dir));
        Ok(self)
    }

    /// Freeze the current state into a query returning `results_desired` rows per page.
    pub fn export(&self, results_desired: u32) -> BuilderResult<TranslatedQuery> {
        if results_desired == 0 {
            return Err(BuilderError::InvalidResultCount);
        }
        if self.selects.is_empty() {
            return Err(BuilderError::NoSelects);
        }

        debug!(
            selects = self.selects.len(),
            conditions = self.conditions.len(),
            order_by = self.order_by.len(),
            results_desired,
            "exporting built query"
        );

        Ok(TranslatedQuery::from_parts(QueryParts {
            selects: self.selects.clone(),
            conditions: self.conditions.clone(),
            order_by: self.order_by.clone(),
            distinct: self.distinct,
            case_insensitive: self.case_insensitive,
            compute_total_row_count: self.compute_total_row_count,
            results_desired,
            origin: QueryOrigin::Builder,
        }))
    }

    fn is_selected(&self, field: &CatalogField) -> bool {
        self.selects.iter().any(|s| s.code() == field.code())
    }

    fn push_condition(
        &mut self,
        field: &CatalogField,
        operator: ConditionOperator,
        value: ConditionValue,
    ) {
        self.conditions.push(ConditionDescriptor::new(
            field.name(),
            FieldSource::CatalogField,
            field.code(),
            operator.as_str(),
            value,
        ));
    }
}
