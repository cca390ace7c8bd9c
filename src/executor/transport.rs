//! The boundary with the catalog service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::query::TranslatedQuery;

/// Failures reaching or talking to the catalog service.
///
/// Executors pass these through untouched and never retry.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("transport I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog request timed out after {0} seconds")]
    Timeout(u64),

    #[error("catalog connection closed")]
    Disconnected,

    /// The catalog answered with an error.
    #[error("catalog error: {message} (code: {code})")]
    Remote { code: String, message: String },

    /// A response arrived but could not be decoded.
    #[error("protocol error: {0}")]
    Protocol(String),
}

impl TransportError {
    pub fn remote(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Whether the executor releases the server cursor itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseBehavior {
    /// The caller drains the result or calls `close`.
    #[default]
    Manual,
    /// Close the cursor straight after the page arrives.
    Auto,
}

/// Positioning and options for one page request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// Server cursor to resume; 0 starts a new query.
    pub continuation: u32,
    /// Explicit row offset. When non-zero it replaces `continuation`.
    pub partial_start: u32,
    pub close: CloseBehavior,
    /// Zone to run the query in, if not the local one.
    pub zone: Option<String>,
}

impl PageRequest {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn continuation(mut self, continuation: u32) -> Self {
        self.continuation = continuation;
        self
    }

    #[must_use]
    pub fn partial_start(mut self, offset: u32) -> Self {
        self.partial_start = offset;
        self
    }

    #[must_use]
    pub fn close_behavior(mut self, close: CloseBehavior) -> Self {
        self.close = close;
        self
    }

    #[must_use]
    pub fn zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    /// The request as sent: a partial start clears the continuation.
    pub fn effective(&self) -> Self {
        let mut request = self.clone();
        if request.partial_start > 0 {
            request.continuation = 0;
        }
        request
    }
}

/// One page as returned by the catalog.
///
/// `columns` is column-major: `columns[attr][row]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResponse {
    pub row_count: u32,
    pub attribute_count: u32,
    pub columns: Vec<Vec<String>>,
    pub continuation: u32,
    #[serde(default)]
    pub total_row_count: Option<u64>,
}

impl RawResponse {
    pub fn cell(&self, row: usize, attribute: usize) -> Option<&str> {
        self.columns
            .get(attribute)
            .and_then(|column| column.get(row))
            .map(String::as_str)
    }
}

/// A blocking channel to the catalog service.
///
/// One request is in flight at a time; callers must not interleave pages of
/// the same cursor.
pub trait CatalogTransport {
    /// Run a query page. `Ok(None)` means the catalog found no rows.
    fn send(
        &mut self,
        query: &TranslatedQuery,
        request: &PageRequest,
    ) -> Result<Option<RawResponse>, TransportError>;

    /// Release the server cursor identified by `continuation`.
    fn send_close(
        &mut self,
        query: &TranslatedQuery,
        continuation: u32,
    ) -> Result<(), TransportError>;
}

impl<T: CatalogTransport + ?Sized> CatalogTransport for &mut T {
    fn send(
        &mut self,
        query: &TranslatedQuery,
        request: &PageRequest,
    ) -> Result<Option<RawResponse>, TransportError> {
        (**self).send(query, request)
    }

    fn send_close(
        &mut self,
        query: &TranslatedQuery,
        continuation: u32,
    ) -> Result<(), TransportError> {
        (**self).send_close(query, continuation)
    }
}

impl<T: CatalogTransport + ?Sized> CatalogTransport for Box<T> {
    fn send(
        &mut self,
        query: &TranslatedQuery,
        request: &PageRequest,
    ) -> Result<Option<RawResponse>, TransportError> {
        (**self).send(query, request)
    }

    fn send_close(
        &mut self,
        query: &TranslatedQuery,
        continuation: u32,
    ) -> Result<(), TransportError> {
        (**self).send_close(query, continuation)
    }
}
