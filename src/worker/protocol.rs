//! Protocol types for catalog worker communication.
//!
//! Requests and responses travel as NDJSON envelopes. The `params` of a
//! `genquery.execute` request carry the query in wire form: numeric column
//! codes with option flags, and condition clauses as text.

use serde::{Deserialize, Serialize};

use crate::executor::{PageRequest, RawResponse};
use crate::query::TranslatedQuery;

// ============================================================================
// Request/Response Envelope
// ============================================================================

/// Request envelope sent to the worker.
#[derive(Debug, Clone, Serialize)]
pub struct RequestEnvelope {
    /// Unique request ID for correlation.
    pub id: String,
    /// Method name (e.g., "genquery.execute").
    pub method: String,
    /// Method-specific parameters.
    pub params: serde_json::Value,
}

/// Response envelope received from the worker.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEnvelope {
    /// Request ID this response corresponds to.
    pub id: String,
    /// Whether the request succeeded.
    pub success: bool,
    /// Result data (present if success = true).
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    /// Error information (present if success = false).
    #[serde(default)]
    pub error: Option<ErrorInfo>,
}

/// Error information in a failed response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorInfo {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

// ============================================================================
// Wire constants
// ============================================================================

/// Query option and column flags.
pub mod flags {
    /// Return the total matching row count with the first page.
    pub const RETURN_TOTAL_ROW_COUNT: u32 = 0x20;
    /// Do not collapse duplicate rows.
    pub const NO_DISTINCT: u32 = 0x40;
    /// Compare where-clause values upper-cased.
    pub const UPPER_CASE_WHERE: u32 = 0x200;
    /// Sort ascending on this select column.
    pub const ORDER_BY: u32 = 0x400;
    /// Sort descending on this select column.
    pub const ORDER_BY_DESC: u32 = 0x800;
}

/// Error code the catalog returns for an empty result.
pub const CAT_NO_ROWS_FOUND: &str = "CAT_NO_ROWS_FOUND";

// ============================================================================
// GenQuery Parameters
// ============================================================================

/// One select column: its code and an option word (aggregation code plus
/// any order-by flag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectEntry {
    pub code: u32,
    pub options: u32,
}

/// One condition: column code and clause text (`" = 'x' "`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionEntry {
    pub code: u32,
    pub clause: String,
}

/// Parameters for `genquery.execute` and `genquery.close`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenQueryParams {
    /// Rows per page; 0 asks the catalog to close the cursor.
    pub max_rows: u32,
    pub continuation: u32,
    pub partial_start: u32,
    pub options: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    pub selects: Vec<SelectEntry>,
    pub conditions: Vec<ConditionEntry>,
}

impl GenQueryParams {
    /// Encode a page request.
    pub fn for_page(query: &TranslatedQuery, request: &PageRequest) -> Self {
        Self {
            max_rows: query.results_desired(),
            continuation: request.continuation,
            partial_start: request.partial_start,
            options: query_options(query),
            zone: request.zone.clone(),
            selects: select_entries(query),
            conditions: condition_entries(query),
        }
    }

    /// Encode a close of the cursor at `continuation`.
    pub fn for_close(query: &TranslatedQuery, continuation: u32) -> Self {
        Self {
            max_rows: 0,
            continuation,
            partial_start: 0,
            options: query_options(query),
            zone: None,
            selects: select_entries(query),
            conditions: condition_entries(query),
        }
    }
}

fn query_options(query: &TranslatedQuery) -> u32 {
    let mut options = 0;
    if !query.is_distinct() {
        options |= flags::NO_DISTINCT;
    }
    if query.is_case_insensitive() {
        options |= flags::UPPER_CASE_WHERE;
    }
    if query.compute_total_row_count() {
        options |= flags::RETURN_TOTAL_ROW_COUNT;
    }
    options
}

fn select_entries(query: &TranslatedQuery) -> Vec<SelectEntry> {
    query
        .selects()
        .iter()
        .map(|field| {
            let order_flag = query
                .order_by()
                .iter()
                .find(|o| o.field().code() == field.code())
                .map_or(0, |o| o.dir().wire_flag());
            SelectEntry {
                code: field.code().value(),
                options: field.aggregation().wire_code() | order_flag,
            }
        })
        .collect()
}

fn condition_entries(query: &TranslatedQuery) -> Vec<ConditionEntry> {
    query
        .conditions()
        .iter()
        .map(|cond| ConditionEntry {
            code: cond.code().value(),
            clause: cond.clause(),
        })
        .collect()
}

/// Result of `genquery.execute`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenQueryResponse {
    pub row_count: u32,
    pub attribute_count: u32,
    pub continuation: u32,
    #[serde(default)]
    pub total_row_count: Option<u64>,
    /// Column-major values, one entry per select.
    #[serde(default)]
    pub columns: Vec<ColumnValues>,
}

/// All values of one select column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnValues {
    pub code: u32,
    pub values: Vec<String>,
}

impl From<GenQueryResponse> for RawResponse {
    fn from(response: GenQueryResponse) -> Self {
        Self {
            row_count: response.row_count,
            attribute_count: response.attribute_count,
            columns: response.columns.into_iter().map(|c| c.values).collect(),
            continuation: response.continuation,
            total_row_count: response.total_row_count,
        }
    }
}

/// Result of `genquery.close`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CloseQueryResponse {
    #[serde(default)]
    pub closed: bool,
}

// ============================================================================
// Method Names
// ============================================================================

/// Method name constants.
pub mod methods {
    pub const GEN_QUERY: &str = "genquery.execute";
    pub const CLOSE_QUERY: &str = "genquery.close";
}
