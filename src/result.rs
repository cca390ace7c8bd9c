//! Result rows and pages.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::query::TranslatedQuery;

/// Result type for row access.
pub type ResultAccess<T> = Result<T, ResultError>;

/// Errors from reading a result row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResultError {
    #[error("column index {index} out of range (row has {len} columns)")]
    ColumnIndexOutOfRange { index: usize, len: usize },

    #[error("column {name} not found in query selects")]
    ColumnNotFound { name: String },

    #[error("column name is empty")]
    EmptyColumnName,
}

// ============================================================================
// Rows
// ============================================================================

/// One row of a result page.
///
/// `record_count` numbers the row within its page, starting after the
/// requested partial start offset. `last_result` is shared by every row in
/// the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    columns: Vec<String>,
    #[serde(skip)]
    column_names: Arc<[String]>,
    record_count: u64,
    last_result: bool,
}

impl ResultRow {
    pub fn new(
        columns: Vec<String>,
        column_names: Arc<[String]>,
        record_count: u64,
        last_result: bool,
    ) -> Self {
        Self {
            columns,
            column_names,
            record_count,
            last_result,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Select-list names, in column order.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn column(&self, index: usize) -> ResultAccess<&str> {
        self.columns
            .get(index)
            .map(String::as_str)
            .ok_or(ResultError::ColumnIndexOutOfRange {
                index,
                len: self.columns.len(),
            })
    }

    /// Look up a column by select name, ignoring ASCII case. First match wins.
    pub fn column_by_name(&self, name: &str) -> ResultAccess<&str> {
        self.column(self.column_index(name)?)
    }

    pub fn column_index(&self, name: &str) -> ResultAccess<usize> {
        if name.is_empty() {
            return Err(ResultError::EmptyColumnName);
        }
        self.column_names
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .ok_or_else(|| ResultError::ColumnNotFound {
                name: name.to_string(),
            })
    }

    /// Parse a column as `i64`; empty or non-numeric values read as 0.
    pub fn column_as_i64_or_zero(&self, index: usize) -> ResultAccess<i64> {
        Ok(self.column(index)?.trim().parse().unwrap_or(0))
    }

    /// Parse a column as `i32`; empty or non-numeric values read as 0.
    pub fn column_as_i32_or_zero(&self, index: usize) -> ResultAccess<i32> {
        Ok(self.column(index)?.trim().parse().unwrap_or(0))
    }

    pub fn column_by_name_as_i64_or_zero(&self, name: &str) -> ResultAccess<i64> {
        self.column_as_i64_or_zero(self.column_index(name)?)
    }

    pub fn column_by_name_as_i32_or_zero(&self, name: &str) -> ResultAccess<i32> {
        self.column_as_i32_or_zero(self.column_index(name)?)
    }

    /// 1-based position of this row, offset by any partial start.
    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    /// True when the page this row belongs to is the final one.
    pub fn is_last_result(&self) -> bool {
        self.last_result
    }
}

// ============================================================================
// Pages
// ============================================================================

/// One page of results from a single round trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSet {
    #[serde(skip)]
    query: Arc<TranslatedQuery>,
    rows: Vec<ResultRow>,
    has_more: bool,
    continuation: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_records: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    zone: Option<String>,
    #[serde(skip)]
    cursor_closed: bool,
}

impl ResultSet {
    pub fn new(
        query: Arc<TranslatedQuery>,
        rows: Vec<ResultRow>,
        continuation: u32,
        total_records: Option<u64>,
    ) -> Self {
        Self {
            query,
            rows,
            has_more: continuation != 0,
            continuation,
            total_records,
            zone: None,
            cursor_closed: false,
        }
    }

    /// Record the zone the page was fetched from.
    #[must_use]
    pub(crate) fn in_zone(mut self, zone: Option<String>) -> Self {
        self.zone = zone;
        self
    }

    pub(crate) fn mark_cursor_closed(&mut self) {
        self.cursor_closed = true;
    }

    /// A page with no rows and nothing further to fetch.
    pub fn empty(query: Arc<TranslatedQuery>) -> Self {
        Self::new(query, Vec::new(), 0, None)
    }

    /// The query this page answers.
    pub fn query(&self) -> &Arc<TranslatedQuery> {
        &self.query
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<ResultRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first(&self) -> Option<&ResultRow> {
        self.rows.first()
    }

    pub fn has_more_records(&self) -> bool {
        self.has_more
    }

    /// Server cursor handle for the next page; 0 once exhausted.
    pub fn continuation(&self) -> u32 {
        self.continuation
    }

    /// Total matching rows, when the query asked for a count.
    pub fn total_records(&self) -> Option<u64> {
        self.total_records
    }

    /// Zone the page was fetched from; later pages go to the same zone.
    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    /// True once the server cursor behind this page has been released.
    ///
    /// An auto-closed page still reports `has_more_records` but cannot be
    /// continued.
    pub fn is_cursor_closed(&self) -> bool {
        self.cursor_closed
    }

    pub fn column_names(&self) -> &[String] {
        self.query.column_names()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ResultRow;
    type IntoIter = std::slice::Iter<'a, ResultRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
