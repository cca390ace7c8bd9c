//! Paged query execution.
//!
//! The executor holds no paging state of its own. Each call sends one page
//! request and returns one [`ResultSet`]; the continuation needed for the
//! next page travels in that set.
//!
//! ```text
//! execute(q, cont=0) ──► page 1 (cont=5, has_more) ──► more_results ──► page 2 (cont=0)
//!                              │
//!                              └── close() releases cursor 5 if abandoned
//! ```
//!
//! # Example
//!
//! ```ignore
//! let mut executor = QueryExecutor::new(transport);
//! let query = Arc::new(translator.translate(&TextQuery::new(text, 500))?);
//!
//! let mut page = executor.execute_query(&query, 0)?;
//! loop {
//!     for row in &page {
//!         println!("{}", row.column_by_name("DATA_NAME")?);
//!     }
//!     if !page.has_more_records() {
//!         break;
//!     }
//!     page = executor.more_results(&page)?;
//! }
//! ```

mod transport;

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::query::TranslatedQuery;
use crate::result::{ResultRow, ResultSet};

pub use transport::{CatalogTransport, CloseBehavior, PageRequest, RawResponse, TransportError};

/// Result type for query execution.
pub type ExecuteResult<T> = Result<T, ExecuteError>;

/// Errors from running a query page.
#[derive(Error, Debug)]
pub enum ExecuteError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// `more_results` on a set whose cursor is exhausted.
    #[error("no more results")]
    NoMoreResults,

    /// `more_results` on a set whose cursor was auto closed.
    #[error("result set cursor {0} is already closed")]
    CursorClosed(u32),

    /// The response grid is smaller than its declared row/attribute counts.
    #[error("malformed catalog response: {0}")]
    MalformedResponse(String),
}

/// Runs translated queries page by page over a [`CatalogTransport`].
pub struct QueryExecutor<T> {
    transport: T,
}

impl<T: CatalogTransport> QueryExecutor<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Fetch one page.
    ///
    /// A non-zero `partial_start` positions the query explicitly and the
    /// continuation is ignored. Rows are numbered from `partial_start + 1`.
    /// With [`CloseBehavior::Auto`] the server cursor is closed before
    /// returning whenever more records remain.
    pub fn execute(
        &mut self,
        query: &Arc<TranslatedQuery>,
        request: PageRequest,
    ) -> ExecuteResult<ResultSet> {
        let request = request.effective();
        info!(
            continuation = request.continuation,
            partial_start = request.partial_start,
            zone = request.zone.as_deref(),
            "sending query page request"
        );

        let Some(response) = self.transport.send(query, &request)? else {
            info!("catalog reports no rows found");
            return Ok(ResultSet::empty(Arc::clone(query)).in_zone(request.zone));
        };

        info!(
            rows = response.row_count,
            continuation = response.continuation,
            "received query page"
        );

        let rows = build_rows(query, &response, request.partial_start)?;
        let total_records = if query.compute_total_row_count() {
            response.total_row_count
        } else {
            None
        };
        let mut result = ResultSet::new(
            Arc::clone(query),
            rows,
            response.continuation,
            total_records,
        )
        .in_zone(request.zone);

        if result.has_more_records() && request.close == CloseBehavior::Auto {
            info!(continuation = result.continuation(), "auto closing result set");
            self.close(&result)?;
            result.mark_cursor_closed();
        }

        Ok(result)
    }

    /// Release the server cursor behind `result`. No-op when nothing remains
    /// or the cursor was already auto closed.
    pub fn close(&mut self, result: &ResultSet) -> ExecuteResult<()> {
        if !result.has_more_records() {
            debug!("no results to close, ignore");
            return Ok(());
        }
        if result.is_cursor_closed() {
            debug!(continuation = result.continuation(), "cursor already closed");
            return Ok(());
        }
        self.transport
            .send_close(result.query(), result.continuation())?;
        Ok(())
    }

    /// Fetch a page from `continuation`, leaving the cursor open.
    pub fn execute_query(
        &mut self,
        query: &Arc<TranslatedQuery>,
        continuation: u32,
    ) -> ExecuteResult<ResultSet> {
        self.execute(query, PageRequest::new().continuation(continuation))
    }

    /// Fetch a page from `continuation` and close the cursor.
    pub fn execute_and_close(
        &mut self,
        query: &Arc<TranslatedQuery>,
        continuation: u32,
    ) -> ExecuteResult<ResultSet> {
        self.execute(
            query,
            PageRequest::new()
                .continuation(continuation)
                .close_behavior(CloseBehavior::Auto),
        )
    }

    /// Fetch the page starting after row `partial_start` and close the cursor.
    pub fn execute_with_paging(
        &mut self,
        query: &Arc<TranslatedQuery>,
        partial_start: u32,
    ) -> ExecuteResult<ResultSet> {
        self.execute(
            query,
            PageRequest::new()
                .partial_start(partial_start)
                .close_behavior(CloseBehavior::Auto),
        )
    }

    /// Fetch the page after `result` from the zone it came from, leaving the
    /// cursor open.
    pub fn more_results(&mut self, result: &ResultSet) -> ExecuteResult<ResultSet> {
        let zone = result.zone().map(str::to_string);
        self.next_page(result, zone)
    }

    /// Fetch the page after `result` from `zone`, leaving the cursor open.
    pub fn more_results_in_zone(
        &mut self,
        result: &ResultSet,
        zone: impl Into<String>,
    ) -> ExecuteResult<ResultSet> {
        self.next_page(result, Some(zone.into()))
    }

    /// Run `query` and hand every fetched page to `visit`.
    ///
    /// With `follow` set, continuations are followed until the cursor is
    /// exhausted and every page is fetched under [`CloseBehavior::Manual`].
    /// Otherwise only the first page is fetched, under the request's own
    /// close behavior. A cursor still open at the end is closed. Returns the
    /// last page.
    pub fn for_each_page<F>(
        &mut self,
        query: &Arc<TranslatedQuery>,
        request: PageRequest,
        follow: bool,
        mut visit: F,
    ) -> ExecuteResult<ResultSet>
    where
        F: FnMut(&ResultSet),
    {
        let request = if follow {
            request.close_behavior(CloseBehavior::Manual)
        } else {
            request
        };

        let mut page = self.execute(query, request)?;
        visit(&page);
        while follow && page.has_more_records() {
            page = self.more_results(&page)?;
            visit(&page);
        }

        self.close(&page)?;
        Ok(page)
    }

    fn next_page(&mut self, result: &ResultSet, zone: Option<String>) -> ExecuteResult<ResultSet> {
        if !result.has_more_records() {
            return Err(ExecuteError::NoMoreResults);
        }
        if result.is_cursor_closed() {
            return Err(ExecuteError::CursorClosed(result.continuation()));
        }
        let mut request = PageRequest::new().continuation(result.continuation());
        if let Some(zone) = zone {
            request = request.zone(zone);
        }
        self.execute(result.query(), request)
    }
}

/// Turn the column-major response grid into numbered rows.
fn build_rows(
    query: &TranslatedQuery,
    response: &RawResponse,
    partial_start: u32,
) -> ExecuteResult<Vec<ResultRow>> {
    let row_count = response.row_count as usize;
    let attribute_count = response.attribute_count as usize;
    let last_result = response.continuation == 0;
    let first_record = u64::from(partial_start) + 1;

    (0..row_count)
        .map(|row| {
            let columns = (0..attribute_count)
                .map(|attr| {
                    response.cell(row, attr).map(str::to_string).ok_or_else(|| {
                        ExecuteError::MalformedResponse(format!(
                            "missing cell at row {row}, attribute {attr}"
                        ))
                    })
                })
                .collect::<ExecuteResult<Vec<_>>>()?;

            Ok(ResultRow::new(
                columns,
                Arc::clone(query.column_names()),
                first_record + row as u64,
                last_result,
            ))
        })
        .collect()
}
