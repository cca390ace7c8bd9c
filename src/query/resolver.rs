//! Field name resolution against the catalog.
//!
//! Select tokens may wrap a column in an aggregate function
//! (`SUM(DATA_SIZE)`); condition fields are bare names. Both are looked up in
//! the catalog symbol table first and the extensible metadata map second.

use tracing::{debug, error};

use super::error::ParseErrorKind;
use super::field::{Aggregation, FieldDescriptor, FieldSource};
use crate::catalog::{CatalogSymbolTable, ExtensibleMetadataMap, FieldCode};

/// A condition field after lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    pub name: String,
    pub code: FieldCode,
    pub source: FieldSource,
}

/// Resolves textual field names to wire codes.
#[derive(Clone, Copy)]
pub struct FieldResolver<'a> {
    catalog: &'a dyn CatalogSymbolTable,
    extensible: Option<&'a ExtensibleMetadataMap>,
}

impl<'a> FieldResolver<'a> {
    pub fn new(catalog: &'a dyn CatalogSymbolTable) -> Self {
        Self {
            catalog,
            extensible: None,
        }
    }

    #[must_use]
    pub fn with_extensible_metadata(mut self, map: &'a ExtensibleMetadataMap) -> Self {
        self.extensible = Some(map);
        self
    }

    /// Resolve one select-list token at 0-based `position`.
    pub fn resolve_select(
        &self,
        token: &str,
        position: usize,
    ) -> Result<FieldDescriptor, ParseErrorKind> {
        debug!(token, position, "resolving select field");
        let (aggregation, raw_field) = split_aggregate(token)?;

        match self.lookup(raw_field) {
            Some(resolved) => Ok(FieldDescriptor::new(
                resolved.name,
                resolved.code,
                resolved.source,
                aggregation,
            )),
            None => {
                error!(token, position, "did not translate select field");
                Err(ParseErrorKind::UntranslatableSelect {
                    field: token.to_string(),
                    position,
                })
            }
        }
    }

    /// Resolve the field part of a condition at 0-based `position` after the where.
    pub fn resolve_condition_field(
        &self,
        name: &str,
        position: usize,
    ) -> Result<ResolvedField, ParseErrorKind> {
        self.lookup(name)
            .ok_or_else(|| ParseErrorKind::UntranslatableCondition {
                field: name.to_string(),
                position,
            })
    }

    fn lookup(&self, name: &str) -> Option<ResolvedField> {
        if let Some(field) = self.catalog.resolve_by_name(name) {
            return Some(ResolvedField {
                name: field.name().to_string(),
                code: self.catalog.numeric_code(&field),
                source: FieldSource::CatalogField,
            });
        }

        let code = self.extensible?.code_for_name(name)?;
        debug!(name, %code, "resolved as extensible metadata");
        Some(ResolvedField {
            name: name.to_string(),
            code,
            source: FieldSource::ExtensibleMetadata,
        })
    }
}

/// Split `FUNC(FIELD)` into its aggregation and inner field name.
///
/// A token without `(` is a plain field.
pub fn split_aggregate(token: &str) -> Result<(Aggregation, &str), ParseErrorKind> {
    let Some(open) = token.find('(') else {
        return Ok((Aggregation::Field, token));
    };

    let close = match token.find(')') {
        Some(close) if close > open => close,
        _ => {
            return Err(ParseErrorKind::MalformedSelect {
                field: token.to_string(),
            })
        }
    };

    let raw_field = token[open + 1..close].trim();
    if raw_field.is_empty() {
        return Err(ParseErrorKind::EmptyAggregate {
            field: token.to_string(),
        });
    }

    let prefix = &token[..open];
    let aggregation =
        Aggregation::from_prefix(prefix).ok_or_else(|| ParseErrorKind::UnknownAggregation {
            function: prefix.to_string(),
            field: token.to_string(),
        })?;

    Ok((aggregation, raw_field))
}
