//! Text query translation.
//!
//! Turns `SELECT [DISTINCT|NON-DISTINCT] f1, f2 [WHERE c1 AND c2]
//! [ORDER BY ...] [GROUP BY ...]` into a [`TranslatedQuery`].
//!
//! # Example
//!
//! ```ignore
//! use genquery::catalog::StaticCatalog;
//! use genquery::query::{QueryTranslator, TextQuery};
//!
//! let translator = QueryTranslator::new(StaticCatalog::builtin());
//! let query = translator.translate(&TextQuery::new(
//!     "select DATA_NAME, sum(DATA_SIZE) where COLL_NAME = '/tempZone/home'",
//!     500,
//! ))?;
//! assert_eq!(query.selects().len(), 2);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::condition::ConditionDescriptor;
use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::field::FieldDescriptor;
use super::lexer::{extract_where_clause, tokenize_conditions};
use super::parser::{parse_conditions, resolve_conditions};
use super::resolver::FieldResolver;
use super::translated::{QueryOrigin, QueryParts, TranslatedQuery};
use crate::catalog::{CatalogSymbolTable, ExtensibleMetadataMap};

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const NON_DISTINCT: &str = "NON-DISTINCT";

// ============================================================================
// Text queries
// ============================================================================

/// A query string plus the options that do not appear in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery {
    query: String,
    results_desired: u32,
    case_insensitive: bool,
    compute_total_row_count: bool,
}

impl TextQuery {
    pub fn new(query: impl Into<String>, results_desired: u32) -> Self {
        Self {
            query: query.into(),
            results_desired,
            case_insensitive: false,
            compute_total_row_count: false,
        }
    }

    /// Ask the catalog to compare where-clause values case-insensitively.
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

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results_desired(&self) -> u32 {
        self.results_desired
    }
}

// ============================================================================
// Translator
// ============================================================================

/// Translates text queries against a catalog symbol table.
#[derive(Clone, Copy)]
pub struct QueryTranslator<'a> {
    resolver: FieldResolver<'a>,
}

impl<'a> QueryTranslator<'a> {
    pub fn new(catalog: &'a dyn CatalogSymbolTable) -> Self {
        Self {
            resolver: FieldResolver::new(catalog),
        }
    }

    /// Consult `map` for names the catalog does not know.
    #[must_use]
    pub fn with_extensible_metadata(mut self, map: &'a ExtensibleMetadataMap) -> Self {
        self.resolver = self.resolver.with_extensible_metadata(map);
        self
    }

    pub fn translate(&self, text: &TextQuery) -> ParseResult<TranslatedQuery> {
        let query = text.query();
        let fail = |kind| ParseError::new(query, kind);

        if query.trim().is_empty() {
            return Err(fail(ParseErrorKind::EmptyQuery));
        }
        if text.results_desired() == 0 {
            return Err(fail(ParseErrorKind::InvalidResultCount));
        }

        let normalized = normalize(query);
        let distinct = !flags_non_distinct(&normalized);

        let selects = scan_selects(&normalized)
            .map_err(fail)?
            .iter()
            .enumerate()
            .map(|(position, token)| self.resolver.resolve_select(token, position))
            .collect::<Result<Vec<_>, _>>()
            .map_err(fail)?;

        let conditions = self.translate_conditions(query).map_err(fail)?;

        review_translation(&selects, &conditions).map_err(fail)?;

        debug!(
            selects = selects.len(),
            conditions = conditions.len(),
            distinct,
            "translated query"
        );

        Ok(TranslatedQuery::from_parts(QueryParts {
            selects,
            conditions,
            order_by: Vec::new(),
            distinct,
            case_insensitive: text.case_insensitive,
            compute_total_row_count: text.compute_total_row_count,
            results_desired: text.results_desired(),
            origin: QueryOrigin::Text(query.to_string()),
        }))
    }

    fn translate_conditions(&self, query: &str) -> Result<Vec<ConditionDescriptor>, ParseErrorKind> {
        let Some(clause) = extract_where_clause(query) else {
            debug!("no where conditions");
            return Ok(Vec::new());
        };

        let tokens = tokenize_conditions(clause.text, clause.offset)?;
        let raw = parse_conditions(&tokens)?;
        resolve_conditions(raw, &self.resolver)
    }
}

/// Upper-case the query and collapse whitespace runs to single spaces.
fn normalize(query: &str) -> String {
    WHITESPACE
        .replace_all(query.trim(), " ")
        .to_ascii_uppercase()
}

/// Whole-string search for `NON-DISTINCT`, including inside quoted values.
fn flags_non_distinct(normalized: &str) -> bool {
    normalized.contains(NON_DISTINCT)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectScan {
    ExpectSelect,
    AfterSelect,
    InFields,
}

/// Collect the select-list tokens between `SELECT` and the first clause keyword.
fn scan_selects(normalized: &str) -> Result<Vec<String>, ParseErrorKind> {
    let delimited = normalized
        .replace("ORDER BY", "ORDERBY")
        .replace("GROUP BY", "GROUPBY")
        .replace(',', " ");

    let mut fields = Vec::new();
    let mut state = SelectScan::ExpectSelect;

    for token in delimited.split_whitespace() {
        state = match (state, token) {
            (SelectScan::ExpectSelect, "SELECT") => SelectScan::AfterSelect,
            (SelectScan::ExpectSelect, _) => return Err(ParseErrorKind::MissingSelect),
            (_, "WHERE" | "ORDERBY" | "GROUPBY") => break,
            (SelectScan::AfterSelect, "DISTINCT" | NON_DISTINCT) => SelectScan::InFields,
            (SelectScan::InFields, "DISTINCT" | NON_DISTINCT) => {
                return Err(ParseErrorKind::MisplacedDistinct {
                    token: token.to_string(),
                    position: fields.len(),
                })
            }
            (_, field) => {
                fields.push(field.to_string());
                SelectScan::InFields
            }
        };
    }

    match state {
        SelectScan::ExpectSelect => Err(ParseErrorKind::MissingSelect),
        _ if fields.is_empty() => Err(ParseErrorKind::NoSelects),
        _ => Ok(fields),
    }
}

/// Final check that every select and condition carries a wire code.
fn review_translation(
    selects: &[FieldDescriptor],
    conditions: &[ConditionDescriptor],
) -> Result<(), ParseErrorKind> {
    if selects.is_empty() {
        return Err(ParseErrorKind::NoSelects);
    }
    if let Some(field) = selects.iter().find(|f| !f.code().is_assigned()) {
        return Err(ParseErrorKind::Untranslated {
            field: field.column_name().to_string(),
        });
    }
    if let Some(cond) = conditions.iter().find(|c| !c.code().is_assigned()) {
        return Err(ParseErrorKind::Untranslated {
            field: cond.field_name().to_string(),
        });
    }
    Ok(())
}

/// The raw tokens after `ORDER BY`, if any.
///
/// Informational only: text queries are not ordered by these fields.
pub fn order_by_fields(query: &str) -> Vec<String> {
    let upper = query.to_ascii_uppercase();
    let Some(idx) = upper.find("ORDER BY") else {
        return Vec::new();
    };

    upper[idx + "ORDER BY".len()..]
        .replace(',', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::query::field::Aggregation;

    fn fixture() -> StaticCatalog {
        StaticCatalog::from_fields([("A", 1), ("B", 2), ("C", 3), ("ZERO", 0)])
    }

    fn translate(catalog: &StaticCatalog, q: &str) -> ParseResult<TranslatedQuery> {
        QueryTranslator::new(catalog).translate(&TextQuery::new(q, 10))
    }

    #[test]
    fn test_scan_selects() {
        assert_eq!(scan_selects("SELECT A, B WHERE A = 'X'").unwrap(), vec!["A", "B"]);
        assert_eq!(scan_selects("SELECT A,B,C").unwrap(), vec!["A", "B", "C"]);
        assert_eq!(scan_selects("SELECT DISTINCT A ORDER BY A").unwrap(), vec!["A"]);
        assert_eq!(scan_selects("SELECT NON-DISTINCT A GROUP BY A").unwrap(), vec!["A"]);
        assert_eq!(scan_selects("SELECT SUM(A), B").unwrap(), vec!["SUM(A)", "B"]);
    }

    #[test]
    fn test_scan_selects_errors() {
        assert_eq!(scan_selects("FOO"), Err(ParseErrorKind::MissingSelect));
        assert_eq!(scan_selects(""), Err(ParseErrorKind::MissingSelect));
        assert_eq!(scan_selects("SELECT"), Err(ParseErrorKind::NoSelects));
        assert_eq!(scan_selects("SELECT WHERE A = 'X'"), Err(ParseErrorKind::NoSelects));
        assert_eq!(
            scan_selects("SELECT A DISTINCT B"),
            Err(ParseErrorKind::MisplacedDistinct {
                token: "DISTINCT".into(),
                position: 1
            })
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  select\ta,\n  b  "), "SELECT A, B");
    }

    #[test]
    fn test_translate_preserves_literal_case() {
        let catalog = fixture();
        let query = translate(&catalog, "select a where a = 'MiXeD Case'").unwrap();
        assert_eq!(query.conditions()[0].value().as_scalar(), Some("'MiXeD Case'"));
        assert_eq!(query.query_text(), Some("select a where a = 'MiXeD Case'"));
        assert!(query.order_by().is_empty());
    }

    #[test]
    fn test_translate_aggregate() {
        let catalog = fixture();
        let query = translate(&catalog, "SELECT a, max(b)").unwrap();
        let aggs: Vec<_> = query.selects().iter().map(|s| s.aggregation()).collect();
        assert_eq!(aggs, vec![Aggregation::Field, Aggregation::Max]);
        assert_eq!(&**query.column_names(), &["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_zero_code_fails_review() {
        let catalog = fixture();
        let err = translate(&catalog, "SELECT ZERO").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Untranslated { field: "ZERO".into() });

        let err = translate(&catalog, "SELECT A WHERE ZERO = '1'").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Untranslated { field: "ZERO".into() });
    }

    #[test]
    fn test_empty_query_and_result_count() {
        let catalog = fixture();
        let translator = QueryTranslator::new(&catalog);
        assert_eq!(
            translator.translate(&TextQuery::new("   ", 10)).unwrap_err().kind,
            ParseErrorKind::EmptyQuery
        );
        assert_eq!(
            translator.translate(&TextQuery::new("SELECT A", 0)).unwrap_err().kind,
            ParseErrorKind::InvalidResultCount
        );
    }

    #[test]
    fn test_options_carried() {
        let catalog = fixture();
        let text = TextQuery::new("SELECT A", 25)
            .case_insensitive(true)
            .compute_total_row_count(true);
        let query = QueryTranslator::new(&catalog).translate(&text).unwrap();
        assert!(query.is_case_insensitive());
        assert!(query.compute_total_row_count());
        assert_eq!(query.results_desired(), 25);
    }

    #[test]
    fn test_order_by_fields() {
        assert_eq!(
            order_by_fields("select a, b where a = 'x' order by a, b"),
            vec!["A", "B"]
        );
        assert!(order_by_fields("select a").is_empty());
    }
}
