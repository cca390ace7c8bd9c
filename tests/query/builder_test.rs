//! Integration tests for programmatic query construction.

use genquery::catalog::{columns, CatalogField};
use genquery::query::{
    Aggregation, BuilderError, ConditionOperator, QueryBuilder, QueryOrigin, SortDir,
};

#[test]
fn test_duplicate_code_rejected() {
    let mut builder = QueryBuilder::new(true);
    builder.add_select(&columns::DATA_NAME).unwrap();

    // Same wire code under another name is still a duplicate
    let alias = CatalogField::new("OBJECT_NAME", columns::DATA_NAME.code());
    let err = builder.add_select(&alias).unwrap_err();
    assert_eq!(
        err,
        BuilderError::DuplicateSelect {
            field: "OBJECT_NAME".into(),
            code: columns::DATA_NAME.code(),
        }
    );

    let err = builder
        .add_select_aggregate(&columns::DATA_NAME, Aggregation::Count)
        .unwrap_err();
    assert!(matches!(err, BuilderError::DuplicateSelect { .. }));
}

#[test]
fn test_export_before_select() {
    let builder = QueryBuilder::new(true);
    assert_eq!(builder.export(100).unwrap_err(), BuilderError::NoSelects);

    let mut builder = QueryBuilder::new(true);
    builder
        .add_condition(&columns::COLL_NAME, ConditionOperator::Equal, "/z")
        .unwrap();
    assert_eq!(builder.export(100).unwrap_err(), BuilderError::NoSelects);
}

#[test]
fn test_export_zero_results() {
    let mut builder = QueryBuilder::new(true);
    builder.add_select(&columns::DATA_NAME).unwrap();
    assert_eq!(
        builder.export(0).unwrap_err(),
        BuilderError::InvalidResultCount
    );
}

#[test]
fn test_order_by_requires_select() {
    let mut builder = QueryBuilder::new(true);
    builder.add_select(&columns::DATA_NAME).unwrap();

    let err = builder
        .add_order_by(&columns::COLL_NAME, SortDir::Asc)
        .unwrap_err();
    assert_eq!(
        err,
        BuilderError::OrderByNotSelected {
            field: "COLL_NAME".into()
        }
    );
}

#[test]
fn test_order_by_keeps_insertion_order() {
    let mut builder = QueryBuilder::new(true);
    builder
        .add_select(&columns::COLL_NAME)
        .unwrap()
        .add_select(&columns::DATA_NAME)
        .unwrap()
        .add_select_aggregate(&columns::DATA_SIZE, Aggregation::Max)
        .unwrap()
        .add_order_by(&columns::DATA_NAME, SortDir::Desc)
        .unwrap()
        .add_order_by(&columns::COLL_NAME, SortDir::Asc)
        .unwrap();

    let query = builder.export(50).unwrap();
    let order: Vec<_> = query
        .order_by()
        .iter()
        .map(|o| (o.field().column_name(), o.dir()))
        .collect();
    assert_eq!(
        order,
        vec![("DATA_NAME", SortDir::Desc), ("COLL_NAME", SortDir::Asc)]
    );

    let selects: Vec<_> = query.selects().iter().map(ToString::to_string).collect();
    insta::assert_snapshot!(selects.join(", "), @"COLL_NAME, DATA_NAME, MAX(DATA_SIZE)");
    assert_eq!(query.origin(), &QueryOrigin::Builder);
    assert_eq!(query.query_text(), None);
}

#[test]
fn test_order_by_without_direction() {
    let mut builder = QueryBuilder::new(true);
    builder.add_select(&columns::DATA_NAME).unwrap();
    let err = builder
        .add_order_by(&columns::DATA_NAME, None::<SortDir>)
        .unwrap_err();
    assert!(matches!(err, BuilderError::MissingDirection { .. }));
}

#[test]
fn test_multi_value_conditions() {
    let mut builder = QueryBuilder::new(false);
    builder
        .add_select(&columns::DATA_NAME)
        .unwrap()
        .add_multi_value_condition(
            &columns::DATA_REPL_NUM,
            ConditionOperator::Between,
            ["'0'", "'3'"],
        )
        .unwrap()
        .add_multi_value_condition(
            &columns::DATA_NAME,
            ConditionOperator::NotIn,
            ["'a.txt'", "'b.txt'"],
        )
        .unwrap();

    let query = builder.export(10).unwrap();
    assert!(!query.is_distinct());
    assert_eq!(query.conditions()[0].clause(), " between '0' '3' ");
    assert_eq!(query.conditions()[1].clause(), " not in ('a.txt','b.txt') ");

    let err = builder
        .add_multi_value_condition(&columns::DATA_NAME, ConditionOperator::In, Vec::<String>::new())
        .unwrap_err();
    assert_eq!(
        err,
        BuilderError::EmptyValueList {
            field: "DATA_NAME".into()
        }
    );

    let err = builder
        .add_multi_value_condition(&columns::DATA_NAME, ConditionOperator::Like, ["'a%'"])
        .unwrap_err();
    assert!(matches!(err, BuilderError::UnsupportedOperator { .. }));
}

#[test]
fn test_scalar_condition_is_quoted() {
    let mut builder = QueryBuilder::new(true);
    builder
        .add_select(&columns::DATA_NAME)
        .unwrap()
        .add_condition(&columns::DATA_SIZE, ConditionOperator::NumGreaterThan, 1024)
        .unwrap()
        .add_condition(&columns::DATA_NAME, ConditionOperator::In, "('x','y')")
        .unwrap();

    let query = builder.export(10).unwrap();
    assert_eq!(query.conditions()[0].clause(), " num> '1024' ");
    assert_eq!(query.conditions()[1].clause(), " in ('x','y') ");
}

#[test]
fn test_export_is_a_snapshot() {
    let mut builder = QueryBuilder::new(true).compute_total_row_count(true);
    builder.add_select(&columns::DATA_NAME).unwrap();
    let first = builder.export(10).unwrap();

    builder.add_select(&columns::COLL_NAME).unwrap();
    let second = builder.export(10).unwrap();

    assert_eq!(first.selects().len(), 1);
    assert_eq!(second.selects().len(), 2);
    assert!(first.compute_total_row_count());
    assert_eq!(first.column_names().len(), 1);
}
