//! Integration tests for text query translation.
//!
//! These run the full translate pipeline: select scanning, where-clause
//! extraction, tokenizing, condition parsing and field resolution.

use genquery::catalog::{columns, ExtensibleMetadataMap, FieldCode, StaticCatalog};
use genquery::query::{
    order_by_fields, Aggregation, FieldSource, ParseErrorKind, ParseResult, QueryOrigin,
    QueryTranslator, TextQuery, TranslatedQuery,
};

fn translate(query: &str) -> ParseResult<TranslatedQuery> {
    QueryTranslator::new(StaticCatalog::builtin()).translate(&TextQuery::new(query, 500))
}

fn translate_fixture(query: &str) -> ParseResult<TranslatedQuery> {
    let catalog = StaticCatalog::from_fields([("A", 1), ("B", 2), ("C", 3)]);
    QueryTranslator::new(&catalog).translate(&TextQuery::new(query, 10))
}

fn condition_lines(query: &TranslatedQuery) -> String {
    query
        .conditions()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn test_data_objects_in_collection() {
    let query = translate(
        "select DATA_NAME,sum(DATA_SIZE) where DATA_NAME = 'foo.txt' AND COLL_NAME = '/tempZone/home'",
    )
    .unwrap();

    let selects = query.selects();
    assert_eq!(selects.len(), 2);
    assert_eq!(selects[0].column_name(), "DATA_NAME");
    assert_eq!(selects[0].aggregation(), Aggregation::Field);
    assert_eq!(selects[0].code(), columns::DATA_NAME.code());
    assert_eq!(selects[1].column_name(), "DATA_SIZE");
    assert_eq!(selects[1].aggregation(), Aggregation::Sum);
    assert_eq!(selects[1].code(), columns::DATA_SIZE.code());

    let conditions = query.conditions();
    assert_eq!(conditions.len(), 2);
    assert!(conditions.iter().all(|c| c.operator() == "="));
    assert!(conditions.iter().all(|c| c.code().is_assigned()));
    assert_eq!(conditions[1].code(), columns::COLL_NAME.code());

    insta::assert_snapshot!(condition_lines(&query), @r"
    DATA_NAME = 'foo.txt'
    COLL_NAME = '/tempZone/home'
    ");

    assert!(query.is_distinct());
    assert_eq!(query.results_desired(), 500);
    assert!(matches!(query.origin(), QueryOrigin::Text(_)));
}

#[test]
fn test_select_order_follows_source() {
    let query = translate_fixture("SELECT C, A, B WHERE A = 'v'").unwrap();
    let names: Vec<_> = query.selects().iter().map(|s| s.column_name()).collect();
    assert_eq!(names, vec!["C", "A", "B"]);

    assert_eq!(query.conditions().len(), 1);
    assert_eq!(query.conditions()[0].operator(), "=");
    assert_eq!(query.conditions()[0].value().as_scalar(), Some("'v'"));
}

#[test]
fn test_literal_keeps_quotes_and_spaces() {
    let query = translate("SELECT DATA_NAME WHERE DATA_NAME like 'my file%.txt'").unwrap();
    let cond = &query.conditions()[0];
    assert_eq!(cond.operator(), "like");
    assert_eq!(cond.value().as_scalar(), Some("'my file%.txt'"));
    assert_eq!(cond.clause(), " like 'my file%.txt' ");
}

#[test]
fn test_escaped_quote_in_value() {
    let query = translate(r"SELECT DATA_NAME WHERE DATA_NAME = 'it\'s'").unwrap();
    assert_eq!(query.conditions().len(), 1);
    assert!(query.conditions()[0]
        .value()
        .as_scalar()
        .is_some_and(|v| v.contains('\'') && v.contains("it")));
}

#[test]
fn test_negated_operator() {
    let query = translate("SELECT DATA_NAME WHERE DATA_NAME not like '%.tmp'").unwrap();
    assert_eq!(query.conditions()[0].operator(), "NOT like");
}

#[test]
fn test_extensible_metadata_field() {
    let catalog = StaticCatalog::builtin();
    let map: ExtensibleMetadataMap = [("STUDY_ID", 10001u32)].into_iter().collect();
    let translator = QueryTranslator::new(catalog).with_extensible_metadata(&map);

    let query = translator
        .translate(&TextQuery::new(
            "SELECT DATA_NAME, study_id WHERE study_id = 'S-17'",
            100,
        ))
        .unwrap();

    assert_eq!(query.selects()[1].source(), FieldSource::ExtensibleMetadata);
    assert_eq!(query.selects()[1].code(), FieldCode::new(10001));
    assert_eq!(query.conditions()[0].source(), FieldSource::ExtensibleMetadata);
}

#[test]
fn test_options_carried_from_text_query() {
    let text = TextQuery::new("SELECT DATA_NAME", 20)
        .case_insensitive(true)
        .compute_total_row_count(true);
    let query = QueryTranslator::new(StaticCatalog::builtin())
        .translate(&text)
        .unwrap();

    assert!(query.is_case_insensitive());
    assert!(query.compute_total_row_count());
    assert_eq!(query.results_desired(), 20);
    assert!(query.conditions().is_empty());
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn test_malformed_inputs_fail_distinctly() {
    let cases = [
        ("foo", ParseErrorKind::MissingSelect),
        ("SELECT a WHERE a = ", ParseErrorKind::IncompleteCondition),
        (
            "SELECT a WHERE a ? 'x'",
            ParseErrorKind::UnknownOperator {
                operator: "?".into(),
            },
        ),
        ("SELECT a WHERE a = 'x", ParseErrorKind::UnterminatedLiteral),
    ];

    for (query, expected) in cases {
        let err = translate_fixture(query).unwrap_err();
        assert_eq!(err.kind, expected, "query: {query}");
        assert_eq!(err.query, query);

        // Same input, same failure
        assert_eq!(translate_fixture(query).unwrap_err(), err);
    }
}

#[test]
fn test_unknown_fields() {
    let err = translate("SELECT NOT_A_COLUMN").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::UntranslatableSelect {
            field: "NOT_A_COLUMN".into(),
            position: 0
        }
    );

    let err = translate("SELECT DATA_NAME WHERE DATA_NAME = 'a' AND BOGUS = 'b'").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::UntranslatableCondition {
            field: "BOGUS".into(),
            position: 1
        }
    );
}

#[test]
fn test_quote_after_text() {
    let err = translate_fixture("SELECT a WHERE a = x'y'").unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::InvalidQuote { offset } if offset == 20));
}

#[test]
fn test_misplaced_distinct() {
    let err = translate_fixture("SELECT A, DISTINCT B").unwrap_err();
    assert!(matches!(
        err.kind,
        ParseErrorKind::MisplacedDistinct { position: 1, .. }
    ));
}

#[test]
fn test_dangling_and() {
    let err = translate_fixture("SELECT a WHERE a = AND b = 'x'").unwrap_err();
    assert!(matches!(
        err.kind,
        ParseErrorKind::AndAfterIncompleteCondition { .. }
    ));
}

// ============================================================================
// Distinct detection
// ============================================================================

#[test]
fn test_non_distinct_keyword() {
    let query = translate("SELECT NON-DISTINCT DATA_NAME").unwrap();
    assert!(!query.is_distinct());

    let query = translate("SELECT DISTINCT DATA_NAME").unwrap();
    assert!(query.is_distinct());
}

/// `NON-DISTINCT` is detected anywhere in the query text, including inside
/// a quoted value, while the select scanner only accepts the keyword right
/// after SELECT. The two checks disagree here and the substring test wins.
#[test]
fn test_non_distinct_inside_literal_disables_distinct() {
    let query = translate("SELECT DATA_NAME WHERE DATA_NAME = 'non-distinct.txt'").unwrap();
    assert!(!query.is_distinct());
    assert_eq!(
        query.conditions()[0].value().as_scalar(),
        Some("'non-distinct.txt'")
    );
}

// ============================================================================
// GROUP BY / ORDER BY
// ============================================================================

#[test]
fn test_order_by_ends_where_clause() {
    let query = translate("SELECT DATA_NAME WHERE DATA_NAME = 'a' ORDER BY DATA_NAME").unwrap();
    assert_eq!(query.conditions().len(), 1);
    assert!(query.order_by().is_empty());
    assert_eq!(
        order_by_fields("SELECT DATA_NAME WHERE DATA_NAME = 'a' ORDER BY DATA_NAME"),
        vec!["DATA_NAME"]
    );
}

#[test]
fn test_group_by_then_order_by() {
    let query = translate(
        "SELECT DATA_NAME, COLL_NAME WHERE COLL_NAME = '/z' GROUP BY COLL_NAME ORDER BY DATA_NAME",
    )
    .unwrap();
    insta::assert_snapshot!(condition_lines(&query), @"COLL_NAME = '/z'");
}

#[test]
fn test_order_by_then_group_by() {
    let query = translate(
        "SELECT DATA_NAME, COLL_NAME WHERE COLL_NAME = '/z' ORDER BY DATA_NAME GROUP BY COLL_NAME",
    )
    .unwrap();
    insta::assert_snapshot!(condition_lines(&query), @"COLL_NAME = '/z'");
}

#[test]
fn test_lowercase_clauses() {
    let query = translate(
        "select data_name where data_name = 'a' and coll_name = '/z' group by coll_name order by data_name",
    )
    .unwrap();
    assert_eq!(query.conditions().len(), 2);
    assert_eq!(query.selects().len(), 1);
}

#[test]
fn test_no_where_clause() {
    let query = translate("SELECT COLL_NAME ORDER BY COLL_NAME").unwrap();
    assert!(query.conditions().is_empty());
    assert_eq!(query.selects().len(), 1);
}

#[test]
fn test_where_after_newline_is_not_a_where_clause() {
    // Selects are read from whitespace-normalized text, conditions are not
    let query = translate("SELECT DATA_NAME\nWHERE DATA_NAME = 'x'").unwrap();
    assert_eq!(query.selects().len(), 1);
    assert!(query.conditions().is_empty());

    let query = translate("SELECT DATA_NAME\tWHERE DATA_NAME = 'x'").unwrap();
    assert!(query.conditions().is_empty());
}
