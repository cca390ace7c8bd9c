//! Catalog symbol table.
//!
//! The remote catalog identifies every queryable column by a numeric wire
//! code. This module models the name → code lookup as an injected,
//! read-only service so translation can run against the builtin table or a
//! small fixture table in tests.
//!
//! # Example
//!
//! ```
//! use genquery::catalog::{columns, CatalogSymbolTable, StaticCatalog};
//!
//! let catalog = StaticCatalog::builtin();
//! let field = catalog.resolve_by_name("data_name").unwrap();
//! assert_eq!(field, columns::DATA_NAME);
//! assert_eq!(catalog.numeric_code(&field).value(), 403);
//! ```

pub mod columns;
mod extensible;

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

pub use extensible::ExtensibleMetadataMap;

// ============================================================================
// Field codes
// ============================================================================

/// Numeric wire code identifying a catalog column.
///
/// The code is the authoritative identity of a field: duplicate detection and
/// order-by matching compare codes, never names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldCode(u32);

impl FieldCode {
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Code 0 is never assigned to a catalog column.
    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for FieldCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FieldCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

// ============================================================================
// Catalog fields
// ============================================================================

/// A column known to the catalog symbol table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CatalogField {
    name: Cow<'static, str>,
    code: FieldCode,
}

impl CatalogField {
    /// A field with a static name, usable in `const` items.
    pub const fn builtin(name: &'static str, code: u32) -> Self {
        Self {
            name: Cow::Borrowed(name),
            code: FieldCode::new(code),
        }
    }

    pub fn new(name: impl Into<String>, code: impl Into<FieldCode>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            code: code.into(),
        }
    }

    /// The column name as used in text queries (e.g. `DATA_NAME`).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> FieldCode {
        self.code
    }
}

impl fmt::Display for CatalogField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.code)
    }
}

// ============================================================================
// Symbol table
// ============================================================================

/// Read-only lookup from column names to catalog fields.
pub trait CatalogSymbolTable: Send + Sync {
    /// Resolve a column name, ignoring ASCII case.
    fn resolve_by_name(&self, name: &str) -> Option<CatalogField>;

    /// Numeric wire code for a resolved field.
    fn numeric_code(&self, field: &CatalogField) -> FieldCode {
        field.code()
    }
}

/// A symbol table backed by an in-memory map.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    by_name: HashMap<String, CatalogField>,
}

static BUILTIN: LazyLock<StaticCatalog> =
    LazyLock::new(|| StaticCatalog::from_catalog_fields(columns::ALL.iter().cloned()));

impl StaticCatalog {
    /// The builtin catalog column table.
    pub fn builtin() -> &'static StaticCatalog {
        &BUILTIN
    }

    /// Build a table from `(name, code)` pairs.
    ///
    /// Later entries replace earlier entries with the same (case-folded) name.
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = (&'a str, u32)>) -> Self {
        Self::from_catalog_fields(
            fields
                .into_iter()
                .map(|(name, code)| CatalogField::new(name, code)),
        )
    }

    pub fn from_catalog_fields(fields: impl IntoIterator<Item = CatalogField>) -> Self {
        let by_name = fields
            .into_iter()
            .map(|field| (field.name().to_ascii_uppercase(), field))
            .collect();
        Self { by_name }
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// All fields, ordered by code.
    pub fn fields(&self) -> Vec<&CatalogField> {
        let mut fields: Vec<_> = self.by_name.values().collect();
        fields.sort_by_key(|field| field.code());
        fields
    }
}

impl CatalogSymbolTable for StaticCatalog {
    fn resolve_by_name(&self, name: &str) -> Option<CatalogField> {
        self.by_name.get(&name.to_ascii_uppercase()).cloned()
    }
}

impl<T: CatalogSymbolTable + ?Sized> CatalogSymbolTable for &T {
    fn resolve_by_name(&self, name: &str) -> Option<CatalogField> {
        (**self).resolve_by_name(name)
    }

    fn numeric_code(&self, field: &CatalogField) -> FieldCode {
        (**self).numeric_code(field)
    }
}
