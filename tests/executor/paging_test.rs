//! Integration tests for paged execution against a scripted transport.

use std::collections::VecDeque;
use std::sync::Arc;

use genquery::catalog::{columns, StaticCatalog};
use genquery::executor::{
    CatalogTransport, CloseBehavior, ExecuteError, PageRequest, QueryExecutor, RawResponse,
    TransportError,
};
use genquery::query::{QueryBuilder, QueryTranslator, TextQuery, TranslatedQuery};

/// Replays canned pages and records every request it sees.
#[derive(Default)]
struct StubTransport {
    pages: VecDeque<Option<RawResponse>>,
    sent: Vec<PageRequest>,
    closed: Vec<u32>,
}

impl StubTransport {
    fn with_pages(pages: impl IntoIterator<Item = Option<RawResponse>>) -> Self {
        Self {
            pages: pages.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl CatalogTransport for StubTransport {
    fn send(
        &mut self,
        _query: &TranslatedQuery,
        request: &PageRequest,
    ) -> Result<Option<RawResponse>, TransportError> {
        self.sent.push(request.clone());
        self.pages.pop_front().ok_or(TransportError::Disconnected)
    }

    fn send_close(
        &mut self,
        _query: &TranslatedQuery,
        continuation: u32,
    ) -> Result<(), TransportError> {
        self.closed.push(continuation);
        Ok(())
    }
}

/// A two-column page: data names and their sizes.
fn page(names: &[&str], continuation: u32) -> Option<RawResponse> {
    Some(RawResponse {
        row_count: names.len() as u32,
        attribute_count: 2,
        columns: vec![
            names.iter().map(|n| n.to_string()).collect(),
            names.iter().map(|n| n.len().to_string()).collect(),
        ],
        continuation,
        total_row_count: Some(5),
    })
}

fn query() -> Arc<TranslatedQuery> {
    let text = TextQuery::new("SELECT DATA_NAME, DATA_SIZE WHERE COLL_NAME = '/tempZone/home'", 3)
        .compute_total_row_count(true);
    Arc::new(
        QueryTranslator::new(StaticCatalog::builtin())
            .translate(&text)
            .unwrap(),
    )
}

#[test]
fn test_two_pages_with_auto_close() {
    let mut executor = QueryExecutor::new(StubTransport::with_pages([
        page(&["a", "bb", "ccc"], 5),
        page(&["dddd", "eeeee"], 0),
    ]));
    let query = query();

    let first = executor
        .execute(&query, PageRequest::new().close_behavior(CloseBehavior::Auto))
        .unwrap();
    assert!(first.has_more_records());
    assert_eq!(first.continuation(), 5);
    assert_eq!(first.len(), 3);
    assert!(first.rows().iter().all(|r| !r.is_last_result()));
    assert_eq!(executor.transport().closed, vec![5]);

    let second = executor
        .execute(
            &query,
            PageRequest::new()
                .continuation(first.continuation())
                .close_behavior(CloseBehavior::Auto),
        )
        .unwrap();
    assert!(!second.has_more_records());
    assert!(second.rows().iter().all(|r| r.is_last_result()));
    assert_eq!(second.total_records(), Some(5));

    // Exactly one close, issued after page one
    assert_eq!(executor.transport().closed, vec![5]);
    assert_eq!(executor.transport().sent[1].continuation, 5);
}

#[test]
fn test_manual_paging_with_more_results() {
    let mut executor = QueryExecutor::new(StubTransport::with_pages([
        page(&["a", "bb", "ccc"], 5),
        page(&["dddd", "eeeee"], 0),
    ]));

    let first = executor.execute_query(&query(), 0).unwrap();
    let second = executor.more_results(&first).unwrap();

    let names: Vec<_> = first
        .rows()
        .iter()
        .chain(&second)
        .map(|row| row.column_by_name("data_name").unwrap())
        .collect();
    assert_eq!(names, vec!["a", "bb", "ccc", "dddd", "eeeee"]);

    // Numbering restarts with every page
    assert_eq!(second.rows()[0].record_count(), 1);
    assert_eq!(second.rows()[1].column_by_name_as_i64_or_zero("DATA_SIZE"), Ok(5));

    assert!(executor.transport().closed.is_empty());
    assert!(matches!(
        executor.more_results(&second),
        Err(ExecuteError::NoMoreResults)
    ));
}

#[test]
fn test_partial_start_numbering() {
    let mut executor =
        QueryExecutor::new(StubTransport::with_pages([page(&["k", "l", "m"], 0)]));

    let result = executor.execute_with_paging(&query(), 10).unwrap();
    let numbers: Vec<_> = result.rows().iter().map(|r| r.record_count()).collect();
    assert_eq!(numbers, vec![11, 12, 13]);

    let sent = &executor.transport().sent[0];
    assert_eq!(sent.partial_start, 10);
    assert_eq!(sent.continuation, 0);
}

#[test]
fn test_partial_start_overrides_continuation() {
    let mut executor = QueryExecutor::new(StubTransport::with_pages([page(&["x"], 0)]));
    executor
        .execute(
            &query(),
            PageRequest::new().continuation(7).partial_start(3),
        )
        .unwrap();

    let sent = &executor.transport().sent[0];
    assert_eq!(sent.continuation, 0);
    assert_eq!(sent.partial_start, 3);
}

#[test]
fn test_no_rows_found_is_empty() {
    let mut executor = QueryExecutor::new(StubTransport::with_pages([None]));
    let result = executor.execute_and_close(&query(), 0).unwrap();

    assert!(result.is_empty());
    assert!(!result.has_more_records());
    assert_eq!(result.total_records(), None);
    assert!(executor.transport().closed.is_empty());
}

#[test]
fn test_zero_row_response_is_empty() {
    let mut executor = QueryExecutor::new(StubTransport::with_pages([page(&[], 0)]));
    let result = executor.execute_query(&query(), 0).unwrap();
    assert!(result.is_empty());
    assert!(!result.has_more_records());
}

#[test]
fn test_close_is_noop_when_exhausted() {
    let mut executor = QueryExecutor::new(StubTransport::with_pages([
        page(&["a"], 9),
        page(&["b"], 0),
    ]));

    let first = executor.execute_query(&query(), 0).unwrap();
    executor.close(&first).unwrap();
    assert_eq!(executor.transport().closed, vec![9]);

    let second = executor.execute_query(&query(), 9).unwrap();
    executor.close(&second).unwrap();
    assert_eq!(executor.transport().closed, vec![9]);
}

#[test]
fn test_zone_travels_with_request() {
    let mut executor = QueryExecutor::new(StubTransport::with_pages([page(&["a"], 0)]));
    let mut builder = QueryBuilder::new(true);
    builder.add_select(&columns::DATA_NAME).unwrap();
    let query = Arc::new(builder.export(1).unwrap());

    executor
        .execute(&query, PageRequest::new().zone("otherZone"))
        .unwrap();
    assert_eq!(
        executor.transport().sent[0].zone.as_deref(),
        Some("otherZone")
    );
}

#[test]
fn test_transport_failure_surfaces() {
    let mut executor = QueryExecutor::new(StubTransport::default());
    let err = executor.execute_query(&query(), 0).unwrap_err();
    assert!(matches!(
        err,
        ExecuteError::Transport(TransportError::Disconnected)
    ));
}

#[test]
fn test_single_page_auto_close_closes_once() {
    let mut executor = QueryExecutor::new(StubTransport::with_pages([page(&["a", "bb"], 5)]));
    let mut seen = 0;

    let last = executor
        .for_each_page(
            &query(),
            PageRequest::new().close_behavior(CloseBehavior::Auto),
            false,
            |page| seen += page.len(),
        )
        .unwrap();

    assert_eq!(seen, 2);
    assert!(last.is_cursor_closed());
    assert_eq!(executor.transport().closed, vec![5]);
    assert_eq!(executor.transport().sent.len(), 1);
}

#[test]
fn test_follow_continuations_ignores_auto_close() {
    let mut executor = QueryExecutor::new(StubTransport::with_pages([
        page(&["a", "bb", "ccc"], 5),
        page(&["dddd", "eeeee"], 0),
    ]));
    let mut names = Vec::new();

    let last = executor
        .for_each_page(
            &query(),
            PageRequest::new().close_behavior(CloseBehavior::Auto),
            true,
            |page| {
                names.extend(
                    page.rows()
                        .iter()
                        .map(|r| r.column_by_name("DATA_NAME").unwrap().to_string()),
                );
            },
        )
        .unwrap();

    assert_eq!(names, vec!["a", "bb", "ccc", "dddd", "eeeee"]);
    assert!(!last.has_more_records());
    let continuations: Vec<_> = executor
        .transport()
        .sent
        .iter()
        .map(|r| r.continuation)
        .collect();
    assert_eq!(continuations, vec![0, 5]);
    assert!(executor
        .transport()
        .sent
        .iter()
        .all(|r| r.close == CloseBehavior::Manual));
    assert!(executor.transport().closed.is_empty());
}

#[test]
fn test_single_page_manual_close_releases_cursor() {
    let mut executor = QueryExecutor::new(StubTransport::with_pages([page(&["a"], 8)]));
    executor
        .for_each_page(&query(), PageRequest::new(), false, |_| {})
        .unwrap();
    assert_eq!(executor.transport().closed, vec![8]);
}

#[test]
fn test_auto_closed_page_cannot_continue() {
    let mut executor = QueryExecutor::new(StubTransport::with_pages([page(&["a"], 5)]));
    let first = executor.execute_and_close(&query(), 0).unwrap();

    assert!(first.has_more_records());
    assert!(matches!(
        executor.more_results(&first),
        Err(ExecuteError::CursorClosed(5))
    ));
    executor.close(&first).unwrap();
    assert_eq!(executor.transport().closed, vec![5]);
}

#[test]
fn test_more_results_stays_in_zone() {
    let mut executor = QueryExecutor::new(StubTransport::with_pages([
        page(&["a"], 4),
        page(&["b"], 0),
    ]));
    let query = query();

    let first = executor
        .execute(&query, PageRequest::new().zone("otherZone"))
        .unwrap();
    assert_eq!(first.zone(), Some("otherZone"));
    let second = executor.more_results(&first).unwrap();
    assert_eq!(second.zone(), Some("otherZone"));

    let sent = &executor.transport().sent;
    assert_eq!(sent[1].zone.as_deref(), Some("otherZone"));
    assert_eq!(sent[1].continuation, 4);
}

#[test]
fn test_more_results_in_other_zone() {
    let mut executor = QueryExecutor::new(StubTransport::with_pages([
        page(&["a"], 4),
        page(&["b"], 0),
    ]));

    let first = executor.execute_query(&query(), 0).unwrap();
    assert_eq!(first.zone(), None);
    executor.more_results_in_zone(&first, "remoteZone").unwrap();

    let sent = &executor.transport().sent;
    assert_eq!(sent[0].zone, None);
    assert_eq!(sent[1].zone.as_deref(), Some("remoteZone"));
}

#[test]
fn test_follow_continuations_keeps_zone() {
    let mut executor = QueryExecutor::new(StubTransport::with_pages([
        page(&["a"], 4),
        page(&["b"], 0),
    ]));
    executor
        .for_each_page(&query(), PageRequest::new().zone("otherZone"), true, |_| {})
        .unwrap();

    let zones: Vec<_> = executor
        .transport()
        .sent
        .iter()
        .map(|r| r.zone.as_deref())
        .collect();
    assert_eq!(zones, vec![Some("otherZone"), Some("otherZone")]);
}
